// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level handle for a single WiZ bulb.
//!
//! [`Bulb`] turns typed operations into pilot commands, sends them through a
//! [`Protocol`] and checks the bulb's acknowledgement.
//!
//! # Examples
//!
//! ```no_run
//! use wiz_aurora::Bulb;
//! use wiz_aurora::command::PilotColor;
//! use wiz_aurora::protocol::UdpConfig;
//! use wiz_aurora::types::RgbColor;
//!
//! # async fn example() -> wiz_aurora::Result<()> {
//! let bulb = Bulb::udp(UdpConfig::new("192.168.1.100"))?;
//!
//! bulb.power_on(Some(PilotColor::Rgb(RgbColor::red_color()))).await?;
//! println!("{}", bulb.get_pilot().await?);
//! bulb.power_off().await?;
//! # Ok(())
//! # }
//! ```

use serde::de::DeserializeOwned;

use crate::command::{Command, GetPilotCommand, Pilot, PilotColor, SetPilotCommand};
use crate::error::{DeviceError, Error};
use crate::protocol::{CommandResponse, Protocol, UdpClient, UdpConfig};
use crate::response::{PilotState, Reply, SetPilotResult};

/// A WiZ bulb controlled through a protocol implementation.
///
/// The type parameter `P` is the transport; [`UdpClient`] talks to real
/// bulbs, tests plug in fakes.
#[derive(Debug)]
pub struct Bulb<P: Protocol> {
    protocol: P,
}

impl Bulb<UdpClient> {
    /// Creates a bulb handle that talks UDP to the configured address.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid.
    pub fn udp(config: UdpConfig) -> Result<Self, Error> {
        Ok(Self::new(config.into_client()?))
    }
}

impl<P: Protocol> Bulb<P> {
    /// Creates a bulb handle over the given protocol.
    pub fn new(protocol: P) -> Self {
        Self { protocol }
    }

    /// Sends a command to the bulb.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails.
    pub async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<CommandResponse, Error> {
        self.protocol
            .send_command(command)
            .await
            .map_err(Error::Protocol)
    }

    /// Sends a command and unwraps the `result` of its reply.
    async fn request<C, T>(&self, command: &C) -> Result<T, Error>
    where
        C: Command + Sync,
        T: DeserializeOwned,
    {
        let response = self.send_command(command).await?;
        let reply = response.parse::<Reply<T>>()?;
        reply.check_method(command.method())?;
        reply.into_result()
    }

    /// Applies a pilot and waits for the bulb to acknowledge it.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails, the bulb rejects the pilot, or
    /// the bulb does not report success.
    pub async fn set_pilot(&self, pilot: Pilot) -> Result<(), Error> {
        let result: SetPilotResult = self.request(&SetPilotCommand::new(pilot)).await?;
        if !result.success {
            return Err(DeviceError::NotAcknowledged.into());
        }
        Ok(())
    }

    /// Turns the bulb on, optionally with a color or white temperature.
    ///
    /// Without a color the bulb resumes its last output.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn power_on(&self, color: Option<PilotColor>) -> Result<(), Error> {
        let pilot = match color {
            Some(PilotColor::Rgb(rgb)) => Pilot::on().with_rgb(rgb),
            Some(PilotColor::Temperature(temp)) => Pilot::on().with_color_temp(temp),
            None => Pilot::on(),
        };
        self.set_pilot(pilot).await
    }

    /// Turns the bulb off.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn power_off(&self) -> Result<(), Error> {
        self.set_pilot(Pilot::off()).await
    }

    /// Queries the current light output.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the reply cannot be parsed.
    pub async fn get_pilot(&self) -> Result<PilotState, Error> {
        self.request(&GetPilotCommand).await
    }
}
