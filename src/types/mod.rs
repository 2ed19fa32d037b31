// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for bulb control.
//!
//! Each type ensures values are within their valid ranges at construction
//! time, so commands built from them are always accepted by the bulb.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off state of the bulb
//! - [`RgbColor`] - 8-bit RGB color
//! - [`ColorTemp`] - White color temperature in Kelvin (1000-10000)

mod color_temp;
mod power;
mod rgb_color;

pub use color_temp::ColorTemp;
pub use power::PowerState;
pub use rgb_color::RgbColor;
