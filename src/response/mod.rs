// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reply parsing for WiZ commands.
//!
//! Every bulb reply is a JSON object echoing the method name and carrying
//! either a `result` object or an `error` object:
//!
//! ```text
//! {"method":"setPilot","env":"pro","result":{"success":true}}
//! {"method":"setPilot","env":"pro","error":{"code":-32602,"message":"Invalid params"}}
//! ```

mod pilot;

pub use pilot::{PilotState, SetPilotResult};

use serde::Deserialize;

use crate::error::{DeviceError, Error, ParseError};

/// Envelope of a bulb reply.
///
/// # Examples
///
/// ```
/// use wiz_aurora::response::{Reply, SetPilotResult};
///
/// let json = r#"{"method":"setPilot","env":"pro","result":{"success":true}}"#;
/// let reply: Reply<SetPilotResult> = serde_json::from_str(json).unwrap();
/// assert!(reply.into_result().unwrap().success);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Reply<T> {
    #[serde(default)]
    method: Option<String>,
    result: Option<T>,
    #[serde(default)]
    error: Option<RpcError>,
}

/// Error object returned by the bulb.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcError {
    /// JSON-RPC error code.
    pub code: i64,
    /// Human readable message.
    #[serde(default)]
    pub message: String,
}

impl<T> Reply<T> {
    /// Returns the echoed method name, if present.
    #[must_use]
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    /// Checks that the reply answers `expected`.
    ///
    /// Replies without an echoed method are accepted.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if the bulb echoed another method.
    pub fn check_method(&self, expected: &str) -> Result<(), ParseError> {
        match self.method() {
            Some(method) if method != expected => Err(ParseError::UnexpectedFormat(format!(
                "expected reply to {expected}, got {method}"
            ))),
            _ => Ok(()),
        }
    }

    /// Unwraps the `result` object.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::CommandRejected` if the bulb replied with an
    /// error object, or `ParseError::MissingField` if neither object is present.
    pub fn into_result(self) -> Result<T, Error> {
        if let Some(error) = self.error {
            return Err(DeviceError::CommandRejected {
                code: error.code,
                message: error.message,
            }
            .into());
        }
        self.result
            .ok_or_else(|| ParseError::MissingField("result".to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_with_error_object() {
        let json = r#"{"method":"setPilot","env":"pro","error":{"code":-32602,"message":"Invalid params"}}"#;
        let reply: Reply<SetPilotResult> = serde_json::from_str(json).unwrap();
        assert_eq!(reply.method(), Some("setPilot"));

        let err = reply.into_result().unwrap_err();
        assert!(matches!(
            err,
            Error::Device(DeviceError::CommandRejected { code: -32602, .. })
        ));
    }

    #[test]
    fn reply_method_is_checked() {
        let reply: Reply<SetPilotResult> =
            serde_json::from_str(r#"{"method":"getPilot","result":{"success":true}}"#).unwrap();
        assert!(reply.check_method("getPilot").is_ok());
        assert!(matches!(
            reply.check_method("setPilot"),
            Err(ParseError::UnexpectedFormat(_))
        ));

        let reply: Reply<SetPilotResult> =
            serde_json::from_str(r#"{"result":{"success":true}}"#).unwrap();
        assert!(reply.check_method("setPilot").is_ok());
    }

    #[test]
    fn reply_without_result() {
        let reply: Reply<SetPilotResult> = serde_json::from_str(r#"{"method":"setPilot"}"#).unwrap();
        assert!(matches!(
            reply.into_result(),
            Err(Error::Parse(ParseError::MissingField(_)))
        ));
    }
}
