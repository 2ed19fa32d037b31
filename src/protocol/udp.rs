// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! UDP protocol implementation for WiZ bulbs.

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;

use tokio::net::UdpSocket;

use crate::command::Command;
use crate::error::ProtocolError;
use crate::protocol::{CommandResponse, Protocol};

/// Largest reply we accept from a bulb. Pilot replies are a few hundred bytes.
const MAX_REPLY_LEN: usize = 2048;

/// Configuration for a WiZ bulb reachable over UDP.
///
/// # Examples
///
/// ```
/// use wiz_aurora::protocol::UdpConfig;
/// use std::time::Duration;
///
/// let config = UdpConfig::new("192.168.1.100")
///     .with_port(38900)
///     .with_timeout(Duration::from_secs(2));
///
/// assert_eq!(config.address(), "192.168.1.100:38900");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UdpConfig {
    host: String,
    port: u16,
    timeout: Duration,
}

impl UdpConfig {
    /// Port WiZ bulbs listen on.
    pub const DEFAULT_PORT: u16 = 38899;
    /// Default time to wait for a reply.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Creates a new configuration for the specified host.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the reply timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the reply timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns `host:port`.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Creates a `UdpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidAddress` if the host is empty.
    pub fn into_client(self) -> Result<UdpClient, ProtocolError> {
        if self.host.trim().is_empty() {
            return Err(ProtocolError::InvalidAddress("host is required".to_string()));
        }
        Ok(UdpClient {
            host: self.host,
            port: self.port,
            timeout: self.timeout,
        })
    }
}

/// UDP client for communicating with a WiZ bulb.
///
/// Each request uses a fresh ephemeral socket connected to the bulb, so a
/// late reply to an earlier request can never be mistaken for the answer to
/// the current one.
///
/// # Examples
///
/// ```no_run
/// use wiz_aurora::command::{Pilot, SetPilotCommand};
/// use wiz_aurora::protocol::{Protocol, UdpConfig};
///
/// # async fn example() -> wiz_aurora::Result<()> {
/// let client = UdpConfig::new("192.168.1.100").into_client()?;
/// let response = client.send_command(&SetPilotCommand::new(Pilot::on())).await?;
/// println!("{}", response.body());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct UdpClient {
    host: String,
    port: u16,
    timeout: Duration,
}

impl UdpClient {
    /// Returns `host:port` of the bulb.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    async fn resolve(&self) -> Result<SocketAddr, ProtocolError> {
        tokio::net::lookup_host((self.host.as_str(), self.port))
            .await?
            .next()
            .ok_or_else(|| ProtocolError::InvalidAddress(self.address()))
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

impl Protocol for UdpClient {
    async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<CommandResponse, ProtocolError> {
        let body = command.to_json()?;
        self.send_raw(&body).await
    }

    async fn send_raw(&self, body: &str) -> Result<CommandResponse, ProtocolError> {
        let target = self.resolve().await?;
        let local: SocketAddr = if target.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(local).await?;
        socket.connect(target).await?;

        tracing::debug!(target = %target, body = %body, "Sending UDP command");
        socket.send(body.as_bytes()).await?;

        let mut buf = vec![0u8; MAX_REPLY_LEN];
        let len = tokio::time::timeout(self.timeout, socket.recv(&mut buf))
            .await
            .map_err(|_| ProtocolError::Timeout(self.timeout_ms()))??;
        if len == MAX_REPLY_LEN {
            tracing::debug!(len, "UDP reply filled the receive buffer and may be truncated");
        }

        let body = String::from_utf8_lossy(&buf[..len]).into_owned();
        tracing::debug!(body = %body, "Received UDP response");

        Ok(CommandResponse::new(body))
    }
}
