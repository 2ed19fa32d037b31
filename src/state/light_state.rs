// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light state tracking.

use serde::{Deserialize, Serialize};

use crate::types::{PowerState, RgbColor};

/// Tracked state of the bulb.
///
/// The color is kept while the bulb is off so it can be reported and
/// restored; only the power flag flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightState {
    power: PowerState,
    color: RgbColor,
}

impl LightState {
    /// Creates the start-up state: powered, showing the aurora color.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_color(RgbColor::AURORA)
    }

    /// Creates a powered state showing `color`.
    #[must_use]
    pub const fn with_color(color: RgbColor) -> Self {
        Self {
            power: PowerState::On,
            color,
        }
    }

    /// Returns the power flag.
    #[must_use]
    pub const fn power(&self) -> PowerState {
        self.power
    }

    /// Returns the last applied color.
    #[must_use]
    pub const fn color(&self) -> RgbColor {
        self.color
    }

    /// Sets the power flag.
    pub fn set_power(&mut self, power: PowerState) {
        self.power = power;
    }

    /// Records a newly applied color.
    pub fn set_color(&mut self, color: RgbColor) {
        self.color = color;
    }

    /// Returns the wire form reported by `/status`.
    #[must_use]
    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            power: self.power.is_on(),
            rgb: self.color.to_array(),
        }
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON body of `/status`: `{"power": true, "rgb": [r, g, b]}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Whether color requests currently take effect.
    pub power: bool,
    /// Last applied color.
    pub rgb: [u8; 3],
}
