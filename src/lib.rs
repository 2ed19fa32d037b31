// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `WiZ Aurora` - a control panel for a single WiZ smart bulb.
//!
//! The crate has two layers:
//!
//! - **Bulb control**: [`Bulb`] speaks the WiZ local UDP protocol through a
//!   [`Protocol`](protocol::Protocol) implementation, and [`LightController`]
//!   serializes commands to it while tracking the power flag and last color.
//! - **HTTP surface**: [`server`] exposes the controller as a handful of GET
//!   routes and serves a self-contained page with an animated aurora that
//!   follows the bulb's color.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use wiz_aurora::protocol::UdpConfig;
//! use wiz_aurora::{Bulb, LightController, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bulb = Bulb::udp(UdpConfig::new("192.168.1.100"))?;
//!     let controller = Arc::new(LightController::new(bulb));
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//!     server::serve(listener, controller, async {
//!         let _ = tokio::signal::ctrl_c().await;
//!     })
//!     .await?;
//!     Ok(())
//! }
//! ```

pub mod command;
pub mod config;
mod controller;
mod device;
pub mod error;
pub mod protocol;
pub mod response;
pub mod server;
pub mod state;
pub mod types;

pub use config::ServerConfig;
pub use controller::{LightController, SetOutcome};
pub use device::Bulb;
pub use error::{ConfigError, DeviceError, Error, ParseError, ProtocolError, Result, ValueError};
pub use state::{LightState, StatusSnapshot};
pub use types::{ColorTemp, PowerState, RgbColor};
