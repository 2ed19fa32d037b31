// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Protocol implementations for communicating with WiZ bulbs.
//!
//! WiZ bulbs listen for JSON datagrams on UDP port 38899 and answer each
//! request with a single datagram. [`UdpClient`] implements that exchange;
//! the [`Protocol`] trait is the seam the rest of the crate talks to.

mod udp;

pub use udp::{UdpClient, UdpConfig};

use std::future::Future;

use crate::command::Command;
use crate::error::ProtocolError;

/// Raw reply to a bulb command.
#[derive(Debug, Clone)]
pub struct CommandResponse {
    body: String,
}

impl CommandResponse {
    /// Creates a new command response with the given body.
    #[must_use]
    pub fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns the raw JSON reply body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the reply as a specific type.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON cannot be parsed into the target type.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T, crate::error::ParseError> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }
}

/// Trait for protocol implementations that can send commands to a bulb.
///
/// The returned futures are `Send` so a bulb can be driven from any tokio
/// worker, including inside axum handlers.
pub trait Protocol: Send + Sync {
    /// Sends a command to the bulb and returns its reply.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the command fails to send or receive.
    fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> impl Future<Output = Result<CommandResponse, ProtocolError>> + Send;

    /// Sends a raw JSON request to the bulb.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the exchange fails.
    fn send_raw(
        &self,
        body: &str,
    ) -> impl Future<Output = Result<CommandResponse, ProtocolError>> + Send;
}
