// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `WiZ Aurora` crate.
//!
//! This module provides the error hierarchy for failures across the crate:
//! value validation, UDP communication with the bulb, reply parsing, bulb-side
//! rejections and startup configuration.

use thiserror::Error;

/// The main error type for this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while talking to the bulb.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a bulb reply.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The bulb answered but refused the command.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),

    /// The server configuration is invalid.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The task running a bulb command was cancelled before it finished.
    #[error("command cancelled")]
    Cancelled,
}

impl Error {
    /// Returns `true` if the bulb did not answer within the configured timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Protocol(ProtocolError::Timeout(_)))
    }
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// An invalid hex color string was provided.
    #[error("invalid hex color: {0}")]
    InvalidHexColor(String),

    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),
}

/// Errors related to the UDP exchange with the bulb.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Socket creation, send or receive failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The bulb did not reply in time.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Invalid host or port.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The command could not be encoded.
    #[error("failed to encode command: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors related to parsing bulb replies.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the reply.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// Unexpected reply format.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),
}

/// Errors reported by the bulb itself.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// The bulb returned a JSON-RPC error object.
    #[error("command rejected ({code}): {message}")]
    CommandRejected {
        /// Error code reported by the bulb.
        code: i64,
        /// Error message reported by the bulb.
        message: String,
    },

    /// The bulb answered `setPilot` without `success: true`.
    #[error("command not acknowledged")]
    NotAcknowledged,
}

/// Errors related to reading the server configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required variable {0}")]
    Missing(&'static str),

    /// An environment variable could not be parsed.
    #[error("invalid value for {name}: {value}")]
    Invalid {
        /// The variable name.
        name: &'static str,
        /// The raw value that failed to parse.
        value: String,
    },
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
