// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pilot commands: set and query the light output.

use serde::Serialize;

use super::Command;
use crate::types::{ColorTemp, PowerState, RgbColor};

/// Color part of a pilot. RGB and white temperature are exclusive on the bulb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PilotColor {
    /// Colored output.
    Rgb(RgbColor),
    /// White output at a color temperature.
    Temperature(ColorTemp),
}

/// Desired light output for a `setPilot` request.
///
/// # Examples
///
/// ```
/// use wiz_aurora::command::{Pilot, PilotColor};
/// use wiz_aurora::types::{ColorTemp, RgbColor};
///
/// let pilot = Pilot::on()
///     .with_rgb(RgbColor::blue_color())
///     .with_color_temp(ColorTemp::WARM);
///
/// // The later call wins.
/// assert_eq!(pilot.color(), Some(PilotColor::Temperature(ColorTemp::WARM)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pilot {
    state: PowerState,
    color: Option<PilotColor>,
}

impl Pilot {
    /// A pilot that turns the bulb on, keeping its current color.
    #[must_use]
    pub const fn on() -> Self {
        Self {
            state: PowerState::On,
            color: None,
        }
    }

    /// A pilot that turns the bulb off.
    #[must_use]
    pub const fn off() -> Self {
        Self {
            state: PowerState::Off,
            color: None,
        }
    }

    /// Sets an RGB color, replacing any color temperature.
    #[must_use]
    pub const fn with_rgb(mut self, color: RgbColor) -> Self {
        self.color = Some(PilotColor::Rgb(color));
        self
    }

    /// Sets a white color temperature, replacing any RGB color.
    #[must_use]
    pub const fn with_color_temp(mut self, temp: ColorTemp) -> Self {
        self.color = Some(PilotColor::Temperature(temp));
        self
    }

    /// Returns the requested power state.
    #[must_use]
    pub const fn state(&self) -> PowerState {
        self.state
    }

    /// Returns the requested color, if any.
    #[must_use]
    pub const fn color(&self) -> Option<PilotColor> {
        self.color
    }
}

/// Params object of a `setPilot` request.
#[derive(Debug, Serialize)]
pub struct PilotParams {
    state: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    r: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    g: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    b: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temp: Option<u16>,
}

impl From<&Pilot> for PilotParams {
    fn from(pilot: &Pilot) -> Self {
        let mut params = Self {
            state: pilot.state.is_on(),
            r: None,
            g: None,
            b: None,
            temp: None,
        };
        match pilot.color {
            Some(PilotColor::Rgb(color)) => {
                params.r = Some(color.red());
                params.g = Some(color.green());
                params.b = Some(color.blue());
            }
            Some(PilotColor::Temperature(temp)) => params.temp = Some(temp.kelvin()),
            None => {}
        }
        params
    }
}

/// Sets the light output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetPilotCommand(Pilot);

impl SetPilotCommand {
    /// Creates a `setPilot` command for the given pilot.
    #[must_use]
    pub const fn new(pilot: Pilot) -> Self {
        Self(pilot)
    }
}

impl Command for SetPilotCommand {
    type Params = PilotParams;

    fn method(&self) -> &'static str {
        "setPilot"
    }

    fn params(&self) -> PilotParams {
        PilotParams::from(&self.0)
    }
}

/// Queries the current light output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetPilotCommand;

/// Empty params object.
#[derive(Debug, Serialize)]
pub struct EmptyParams {}

impl Command for GetPilotCommand {
    type Params = EmptyParams;

    fn method(&self) -> &'static str {
        "getPilot"
    }

    fn params(&self) -> EmptyParams {
        EmptyParams {}
    }
}
