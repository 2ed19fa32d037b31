// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! WiZ command definitions.
//!
//! WiZ bulbs speak a JSON-RPC flavoured protocol over UDP. Every request is a
//! single JSON object carrying a method name and a params object:
//!
//! ```text
//! {"method":"setPilot","params":{"state":true,"r":255,"g":0,"b":0}}
//! ```
//!
//! # Available Commands
//!
//! | Command Type | Method | Purpose |
//! |-------------|--------|---------|
//! | [`SetPilotCommand`] | `setPilot` | Power, RGB color, white temperature |
//! | [`GetPilotCommand`] | `getPilot` | Query the current light output |
//!
//! # Examples
//!
//! ```
//! use wiz_aurora::command::{Command, Pilot, SetPilotCommand};
//! use wiz_aurora::types::RgbColor;
//!
//! let cmd = SetPilotCommand::new(Pilot::on().with_rgb(RgbColor::red_color()));
//! assert_eq!(cmd.method(), "setPilot");
//! assert_eq!(
//!     cmd.to_json().unwrap(),
//!     r#"{"method":"setPilot","params":{"state":true,"r":255,"g":0,"b":0}}"#
//! );
//! ```

mod pilot;

pub use pilot::{EmptyParams, GetPilotCommand, Pilot, PilotColor, PilotParams, SetPilotCommand};

use serde::Serialize;

/// A command that can be sent to a WiZ bulb.
pub trait Command {
    /// The params object type serialized into the request.
    type Params: Serialize;

    /// Returns the JSON-RPC method name.
    fn method(&self) -> &'static str;

    /// Returns the params object.
    fn params(&self) -> Self::Params;

    /// Returns the full request body.
    ///
    /// # Errors
    ///
    /// Returns error if the params cannot be serialized.
    fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&Request {
            method: self.method(),
            params: self.params(),
        })
    }
}

#[derive(Serialize)]
struct Request<P> {
    method: &'static str,
    params: P,
}
