// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serialized light control for a single bulb.
//!
//! [`LightController`] owns the bulb handle and the tracked [`LightState`].
//! Every mutation holds the bulb lock for the whole device round-trip, so the
//! order in which commands reach the bulb is the order in which state is
//! committed. State is only committed once the bulb acknowledges.
//!
//! The state itself sits behind a separate synchronous lock: reading it never
//! waits on device I/O.
//!
//! Each mutation runs on a spawned task, so the send and the commit happen
//! together even if the caller stops waiting halfway through.
//!
//! # Power gating
//!
//! Color requests are ignored while the power flag is off. White requests are
//! not gated: asking for white turns the bulb on in white mode, but leaves
//! the power flag as it was.

use std::future::Future;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::Mutex;

use crate::command::PilotColor;
use crate::device::Bulb;
use crate::error::Error;
use crate::protocol::Protocol;
use crate::response::PilotState;
use crate::state::LightState;
use crate::types::{ColorTemp, PowerState, RgbColor};

/// Outcome of a color request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// The bulb took the color and the state was updated.
    Applied,
    /// The power flag is off; nothing was sent.
    Ignored,
}

/// Controller for one bulb.
///
/// Mutations run on their own task. Dropping the returned future (for
/// example when the HTTP client goes away) does not stop a command that is
/// already in flight: it still finishes and commits.
///
/// # Examples
///
/// ```no_run
/// use wiz_aurora::{Bulb, LightController, SetOutcome};
/// use wiz_aurora::protocol::UdpConfig;
/// use wiz_aurora::types::RgbColor;
///
/// # async fn example() -> wiz_aurora::Result<()> {
/// let controller = LightController::new(Bulb::udp(UdpConfig::new("192.168.1.100"))?);
///
/// controller.power_off().await?;
/// let outcome = controller.set_color(RgbColor::red_color()).await?;
/// assert_eq!(outcome, SetOutcome::Ignored);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct LightController<P: Protocol> {
    shared: Arc<Shared<P>>,
}

#[derive(Debug)]
struct Shared<P: Protocol> {
    bulb: Mutex<Bulb<P>>,
    state: RwLock<LightState>,
}

impl<P: Protocol + 'static> LightController<P> {
    /// Color temperature used by [`set_white`](Self::set_white).
    pub const WHITE_TEMP: ColorTemp = ColorTemp::NEUTRAL;

    /// Creates a controller with the start-up state.
    pub fn new(bulb: Bulb<P>) -> Self {
        Self::with_state(bulb, LightState::new())
    }

    /// Creates a controller with a specific initial state.
    pub fn with_state(bulb: Bulb<P>, state: LightState) -> Self {
        Self {
            shared: Arc::new(Shared {
                bulb: Mutex::new(bulb),
                state: RwLock::new(state),
            }),
        }
    }

    /// Returns a snapshot of the tracked state.
    #[must_use]
    pub fn state(&self) -> LightState {
        *self.shared.state.read()
    }

    /// Sets the bulb color if the power flag is on.
    ///
    /// # Errors
    ///
    /// Returns error if the bulb cannot be reached or refuses the command.
    /// The tracked state is unchanged in that case.
    pub async fn set_color(&self, color: RgbColor) -> Result<SetOutcome, Error> {
        self.run(move |shared| async move { shared.set_color(color).await })
            .await
    }

    /// Switches the bulb to neutral white, regardless of the power flag.
    ///
    /// The tracked color becomes [`RgbColor::WHITE_APPROX`].
    ///
    /// # Errors
    ///
    /// Returns error if the bulb cannot be reached or refuses the command.
    pub async fn set_white(&self) -> Result<(), Error> {
        let temp = Self::WHITE_TEMP;
        self.run(move |shared| async move { shared.set_white(temp).await })
            .await
    }

    /// Turns the bulb on with its last color and sets the power flag.
    ///
    /// # Errors
    ///
    /// Returns error if the bulb cannot be reached or refuses the command.
    pub async fn power_on(&self) -> Result<(), Error> {
        self.run(|shared| async move { shared.set_power(PowerState::On).await })
            .await
    }

    /// Turns the bulb off and clears the power flag. The color is kept.
    ///
    /// # Errors
    ///
    /// Returns error if the bulb cannot be reached or refuses the command.
    pub async fn power_off(&self) -> Result<(), Error> {
        self.run(|shared| async move { shared.set_power(PowerState::Off).await })
            .await
    }

    /// Queries the bulb for its current output.
    ///
    /// Serialized with the other commands; the tracked state is not touched.
    ///
    /// # Errors
    ///
    /// Returns error if the bulb cannot be reached or the reply is malformed.
    pub async fn query_bulb(&self) -> Result<PilotState, Error> {
        self.shared.bulb.lock().await.get_pilot().await
    }

    /// Runs a mutation on a detached task and waits for its result.
    async fn run<T, F, Fut>(&self, op: F) -> Result<T, Error>
    where
        T: Send + 'static,
        F: FnOnce(Arc<Shared<P>>) -> Fut,
        Fut: Future<Output = Result<T, Error>> + Send + 'static,
    {
        let task = tokio::spawn(op(Arc::clone(&self.shared)));
        match task.await {
            Ok(result) => result,
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Err(_) => Err(Error::Cancelled),
        }
    }
}

impl<P: Protocol> Shared<P> {
    async fn set_color(&self, color: RgbColor) -> Result<SetOutcome, Error> {
        let bulb = self.bulb.lock().await;

        let powered = self.state.read().power().is_on();
        if !powered {
            tracing::warn!(%color, "Ignoring color request while powered off");
            return Ok(SetOutcome::Ignored);
        }

        bulb.power_on(Some(PilotColor::Rgb(color))).await?;
        self.state.write().set_color(color);
        tracing::info!(%color, "Color applied");

        Ok(SetOutcome::Applied)
    }

    async fn set_white(&self, temp: ColorTemp) -> Result<(), Error> {
        let bulb = self.bulb.lock().await;

        bulb.power_on(Some(PilotColor::Temperature(temp))).await?;
        self.state.write().set_color(RgbColor::WHITE_APPROX);
        tracing::info!(%temp, "White applied");

        Ok(())
    }

    async fn set_power(&self, power: PowerState) -> Result<(), Error> {
        let bulb = self.bulb.lock().await;

        match power {
            PowerState::On => bulb.power_on(None).await?,
            PowerState::Off => bulb.power_off().await?,
        }
        self.state.write().set_power(power);
        tracing::info!(%power, "Power changed");

        Ok(())
    }
}
