// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Server configuration.
//!
//! The server reads its settings once at start-up from the environment:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `WIZ_BULB_HOST` | required | Bulb IP address or hostname |
//! | `WIZ_BULB_PORT` | `38899` | Bulb UDP port |
//! | `WIZ_TIMEOUT_MS` | `5000` | Time to wait for a bulb reply |
//! | `WIZ_LISTEN_ADDR` | `0.0.0.0:8000` | HTTP listen address |
//! | `WIZ_INITIAL_COLOR` | `#78B4FF` | Color reported before any request |

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use crate::error::ConfigError;
use crate::protocol::UdpConfig;
use crate::types::RgbColor;

const BULB_HOST: &str = "WIZ_BULB_HOST";
const BULB_PORT: &str = "WIZ_BULB_PORT";
const TIMEOUT_MS: &str = "WIZ_TIMEOUT_MS";
const LISTEN_ADDR: &str = "WIZ_LISTEN_ADDR";
const INITIAL_COLOR: &str = "WIZ_INITIAL_COLOR";

/// Configuration of the control server.
///
/// # Examples
///
/// ```
/// use wiz_aurora::config::ServerConfig;
/// use wiz_aurora::protocol::UdpConfig;
///
/// let config = ServerConfig::new(UdpConfig::new("192.168.1.100"))
///     .with_listen_addr("127.0.0.1:9000".parse().unwrap());
///
/// assert_eq!(config.listen_addr().port(), 9000);
/// assert_eq!(config.bulb().port(), 38899);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    bulb: UdpConfig,
    listen_addr: SocketAddr,
    initial_color: RgbColor,
}

impl ServerConfig {
    /// Default HTTP listen port.
    pub const DEFAULT_LISTEN_PORT: u16 = 8000;

    /// Creates a configuration for the given bulb with default server settings.
    #[must_use]
    pub fn new(bulb: UdpConfig) -> Self {
        Self {
            bulb,
            listen_addr: (Ipv4Addr::UNSPECIFIED, Self::DEFAULT_LISTEN_PORT).into(),
            initial_color: RgbColor::AURORA,
        }
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `WIZ_BULB_HOST` is missing or any variable
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the bulb host is missing or any value cannot
    /// be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(BULB_HOST)
            .filter(|host| !host.trim().is_empty())
            .ok_or(ConfigError::Missing(BULB_HOST))?;

        let mut bulb = UdpConfig::new(host.trim());
        if let Some(port) = parse_var(&lookup, BULB_PORT)? {
            bulb = bulb.with_port(port);
        }
        if let Some(ms) = parse_var::<u64, _>(&lookup, TIMEOUT_MS)? {
            bulb = bulb.with_timeout(Duration::from_millis(ms));
        }

        let mut config = Self::new(bulb);
        if let Some(addr) = parse_var(&lookup, LISTEN_ADDR)? {
            config = config.with_listen_addr(addr);
        }
        if let Some(color) = parse_var(&lookup, INITIAL_COLOR)? {
            config = config.with_initial_color(color);
        }
        Ok(config)
    }

    /// Sets the HTTP listen address.
    #[must_use]
    pub fn with_listen_addr(mut self, addr: SocketAddr) -> Self {
        self.listen_addr = addr;
        self
    }

    /// Sets the color reported before any request.
    #[must_use]
    pub fn with_initial_color(mut self, color: RgbColor) -> Self {
        self.initial_color = color;
        self
    }

    /// Returns the bulb configuration.
    #[must_use]
    pub fn bulb(&self) -> &UdpConfig {
        &self.bulb
    }

    /// Returns the HTTP listen address.
    #[must_use]
    pub fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    /// Returns the color reported before any request.
    #[must_use]
    pub fn initial_color(&self) -> RgbColor {
        self.initial_color
    }
}

fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
