// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pilot reply parsing.

use std::fmt;

use serde::Deserialize;

use crate::types::{ColorTemp, PowerState, RgbColor};

/// Result object of a `setPilot` reply.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SetPilotResult {
    /// Whether the bulb applied the pilot.
    #[serde(default)]
    pub success: bool,
}

/// Result object of a `getPilot` reply.
///
/// # Examples
///
/// ```
/// use wiz_aurora::response::PilotState;
/// use wiz_aurora::types::{PowerState, RgbColor};
///
/// let json = r#"{"mac":"a8bb50aabbcc","rssi":-58,"state":true,"sceneId":0,"r":255,"g":0,"b":0,"dimming":100}"#;
/// let pilot: PilotState = serde_json::from_str(json).unwrap();
/// assert_eq!(pilot.power(), PowerState::On);
/// assert_eq!(pilot.rgb(), Some(RgbColor::red_color()));
/// assert_eq!(pilot.color_temp(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PilotState {
    /// MAC address of the bulb.
    #[serde(default)]
    pub mac: Option<String>,
    /// Wi-Fi signal strength in dBm.
    #[serde(default)]
    pub rssi: Option<i32>,
    /// Whether the light is on.
    pub state: bool,
    /// Active scene, 0 when none.
    #[serde(default)]
    pub scene_id: Option<u16>,
    #[serde(default)]
    r: Option<u8>,
    #[serde(default)]
    g: Option<u8>,
    #[serde(default)]
    b: Option<u8>,
    #[serde(default)]
    temp: Option<u16>,
    /// Brightness in percent (10-100).
    #[serde(default)]
    pub dimming: Option<u8>,
}

impl PilotState {
    /// Returns the power state.
    #[must_use]
    pub fn power(&self) -> PowerState {
        PowerState::from(self.state)
    }

    /// Returns the RGB color, when the bulb is in color mode.
    #[must_use]
    pub fn rgb(&self) -> Option<RgbColor> {
        match (self.r, self.g, self.b) {
            (Some(r), Some(g), Some(b)) => Some(RgbColor::new(r, g, b)),
            _ => None,
        }
    }

    /// Returns the white temperature, when the bulb is in white mode.
    #[must_use]
    pub fn color_temp(&self) -> Option<ColorTemp> {
        self.temp.map(ColorTemp::clamped)
    }
}

impl fmt::Display for PilotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.power())?;
        if let Some(color) = self.rgb() {
            write!(f, " {color}")?;
        }
        if let Some(temp) = self.color_temp() {
            write!(f, " {temp}")?;
        }
        if let Some(dimming) = self.dimming {
            write!(f, " {dimming}%")?;
        }
        Ok(())
    }
}
