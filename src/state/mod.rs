// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light state tracked by the server.
//!
//! [`LightState`] is the authoritative in-memory view of the bulb: the power
//! flag that gates color requests, and the last color that was applied.
//!
//! # Examples
//!
//! ```
//! use wiz_aurora::state::LightState;
//! use wiz_aurora::types::{PowerState, RgbColor};
//!
//! let mut state = LightState::new();
//! assert_eq!(state.power(), PowerState::On);
//!
//! state.set_power(PowerState::Off);
//! assert_eq!(state.color(), RgbColor::AURORA);
//! ```

mod light_state;

pub use light_state::{LightState, StatusSnapshot};
