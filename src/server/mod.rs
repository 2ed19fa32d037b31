// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP surface of the control panel.
//!
//! | Route | Query | Response |
//! |-------|-------|----------|
//! | `/` | | control page |
//! | `/set` | `r`, `g`, `b` (0-255) | `{"ok":true}` or `{"ignored":true}` |
//! | `/white` | | `{"ok":true}` |
//! | `/on` | | `{"ok":true}` |
//! | `/off` | | `{"ok":true}` |
//! | `/status` | | `{"power":bool,"rgb":[r,g,b]}` |
//!
//! A bulb failure on a mutating route answers `{"ok":false,"error":"..."}`
//! with `504` when the bulb did not reply in time and `502` otherwise.
//! Missing or out-of-range color channels are rejected with `400`.

mod page;

pub use page::INDEX_HTML;

use std::future::Future;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::controller::{LightController, SetOutcome};
use crate::error::Error;
use crate::protocol::Protocol;
use crate::state::StatusSnapshot;
use crate::types::RgbColor;

type SharedController<P> = Arc<LightController<P>>;

/// Builds the router for a controller.
pub fn router<P: Protocol + 'static>(controller: SharedController<P>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/set", get(set_color::<P>))
        .route("/white", get(set_white::<P>))
        .route("/on", get(power_on::<P>))
        .route("/off", get(power_off::<P>))
        .route("/status", get(status::<P>))
        .with_state(controller)
        .layer(TraceLayer::new_for_http())
}

/// Serves the control panel on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns error if the server fails while accepting connections.
pub async fn serve<P, F>(
    listener: TcpListener,
    controller: SharedController<P>,
    shutdown: F,
) -> std::io::Result<()>
where
    P: Protocol + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(controller))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Query of `/set`.
#[derive(Debug, Clone, Copy, Deserialize)]
struct ColorQuery {
    r: u8,
    g: u8,
    b: u8,
}

/// Successful reply of a mutating route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
enum Ack {
    Done { ok: bool },
    Ignored { ignored: bool },
}

impl Ack {
    const DONE: Self = Self::Done { ok: true };
    const IGNORED: Self = Self::Ignored { ignored: true };
}

/// Error reply of a mutating route.
#[derive(Debug)]
struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    ok: bool,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_timeout() {
            StatusCode::GATEWAY_TIMEOUT
        } else {
            StatusCode::BAD_GATEWAY
        };
        tracing::warn!(error = %self.0, status = status.as_u16(), "Bulb command failed");

        let body = ErrorBody {
            ok: false,
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn set_color<P: Protocol + 'static>(
    State(controller): State<SharedController<P>>,
    Query(query): Query<ColorQuery>,
) -> Result<Json<Ack>, ApiError> {
    let color = RgbColor::new(query.r, query.g, query.b);
    let ack = match controller.set_color(color).await? {
        SetOutcome::Applied => Ack::DONE,
        SetOutcome::Ignored => Ack::IGNORED,
    };
    Ok(Json(ack))
}

async fn set_white<P: Protocol + 'static>(
    State(controller): State<SharedController<P>>,
) -> Result<Json<Ack>, ApiError> {
    controller.set_white().await?;
    Ok(Json(Ack::DONE))
}

async fn power_on<P: Protocol + 'static>(
    State(controller): State<SharedController<P>>,
) -> Result<Json<Ack>, ApiError> {
    controller.power_on().await?;
    Ok(Json(Ack::DONE))
}

async fn power_off<P: Protocol + 'static>(
    State(controller): State<SharedController<P>>,
) -> Result<Json<Ack>, ApiError> {
    controller.power_off().await?;
    Ok(Json(Ack::DONE))
}

async fn status<P: Protocol + 'static>(
    State(controller): State<SharedController<P>>,
) -> Json<StatusSnapshot> {
    Json(controller.state().snapshot())
}
