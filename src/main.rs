// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Control panel server for a single WiZ bulb.
//!
//! # Usage
//!
//! ```bash
//! WIZ_BULB_HOST=192.168.1.100 cargo run
//! ```
//!
//! See [`wiz_aurora::config`] for the other variables. Logging honors
//! `RUST_LOG`.

use std::process::ExitCode;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use wiz_aurora::{Bulb, LightController, LightState, ServerConfig, server};

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    let bulb = Bulb::udp(config.bulb().clone())?;
    let controller = Arc::new(LightController::with_state(
        bulb,
        LightState::with_color(config.initial_color()),
    ));

    match controller.query_bulb().await {
        Ok(pilot) => tracing::info!(bulb = %config.bulb().address(), %pilot, "Bulb reachable"),
        Err(e) => tracing::warn!(bulb = %config.bulb().address(), error = %e, "Bulb not answering"),
    }

    let listener = TcpListener::bind(config.listen_addr()).await?;
    tracing::info!(address = %format!("http://{}", listener.local_addr()?), "Listening");

    server::serve(listener, controller, shutdown_signal()).await?;

    tracing::info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Cannot listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
