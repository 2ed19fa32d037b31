// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the HTTP surface, driving the real UDP client
//! against an in-process fake bulb.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde_json::{Value, json};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::mpsc;
use wiz_aurora::protocol::UdpConfig;
use wiz_aurora::{Bulb, LightController, StatusSnapshot, server};

// ============================================================================
// Fixtures
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum BulbMode {
    /// Acknowledge every request.
    Ack,
    /// Reply with a JSON-RPC error object.
    Reject,
    /// Never reply.
    Silent,
    /// Acknowledge after a delay.
    Slow(Duration),
}

/// A fake WiZ bulb bound on localhost that records every request.
struct FakeBulb {
    port: u16,
    received: mpsc::UnboundedReceiver<Value>,
}

impl FakeBulb {
    async fn spawn(mode: BulbMode) -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let port = socket.local_addr().unwrap().port();
        let (tx, received) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            let mut buf = [0u8; 1024];
            while let Ok((len, peer)) = socket.recv_from(&mut buf).await {
                let request: Value = serde_json::from_slice(&buf[..len]).unwrap();
                let method = request["method"].clone();
                let _ = tx.send(request);

                let reply = match mode {
                    BulbMode::Ack | BulbMode::Slow(_) => json!({
                        "method": method,
                        "env": "pro",
                        "result": {"success": true}
                    }),
                    BulbMode::Reject => json!({
                        "method": method,
                        "env": "pro",
                        "error": {"code": -32600, "message": "Invalid Request"}
                    }),
                    BulbMode::Silent => continue,
                };
                if let BulbMode::Slow(delay) = mode {
                    tokio::time::sleep(delay).await;
                }
                socket
                    .send_to(reply.to_string().as_bytes(), peer)
                    .await
                    .unwrap();
            }
        });

        Self { port, received }
    }

    /// Returns every request received so far.
    fn drain(&mut self) -> Vec<Value> {
        let mut requests = Vec::new();
        while let Ok(request) = self.received.try_recv() {
            requests.push(request);
        }
        requests
    }
}

/// Starts the control server for the bulb and returns its base URL.
async fn spawn_server(bulb: &FakeBulb, timeout: Duration) -> String {
    let config = UdpConfig::new("127.0.0.1")
        .with_port(bulb.port)
        .with_timeout(timeout);
    let controller = Arc::new(LightController::new(Bulb::udp(config).unwrap()));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(server::serve(listener, controller, std::future::pending()));

    format!("http://{addr}")
}

async fn setup() -> (FakeBulb, String) {
    let bulb = FakeBulb::spawn(BulbMode::Ack).await;
    let base = spawn_server(&bulb, Duration::from_secs(2)).await;
    (bulb, base)
}

async fn get_json(base: &str, path: &str) -> (StatusCode, Value) {
    let response = reqwest::get(format!("{base}{path}")).await.unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

async fn status(base: &str) -> StatusSnapshot {
    reqwest::get(format!("{base}/status"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

fn set_pilot(params: &Value) -> Value {
    json!({"method": "setPilot", "params": params})
}

// ============================================================================
// Routes
// ============================================================================

mod routes {
    use super::*;

    #[tokio::test]
    async fn index_serves_control_page() {
        let (_bulb, base) = setup().await;

        let response = reqwest::get(format!("{base}/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers()["content-type"].to_str().unwrap().to_owned();
        assert!(content_type.starts_with("text/html"));

        let body = response.text().await.unwrap();
        assert!(body.contains("aurora-stroke"));
        assert!(body.contains("/status"));
    }

    #[tokio::test]
    async fn initial_status() {
        let (mut bulb, base) = setup().await;

        let snapshot = status(&base).await;

        assert_eq!(
            snapshot,
            StatusSnapshot {
                power: true,
                rgb: [120, 180, 255]
            }
        );
        assert!(bulb.drain().is_empty());
    }

    #[tokio::test]
    async fn set_while_powered_updates_color() {
        let (mut bulb, base) = setup().await;

        let (code, body) = get_json(&base, "/set?r=12&g=34&b=56").await;

        assert_eq!(code, StatusCode::OK);
        assert_eq!(body, json!({"ok": true}));
        assert_eq!(status(&base).await.rgb, [12, 34, 56]);
        assert_eq!(
            bulb.drain(),
            vec![set_pilot(&json!({"state": true, "r": 12, "g": 34, "b": 56}))]
        );
    }

    #[tokio::test]
    async fn set_while_off_is_ignored() {
        let (mut bulb, base) = setup().await;
        get_json(&base, "/off").await;
        bulb.drain();

        let (code, body) = get_json(&base, "/set?r=255&g=0&b=0").await;

        assert_eq!(code, StatusCode::OK);
        assert_eq!(body, json!({"ignored": true}));
        assert_eq!(status(&base).await.rgb, [120, 180, 255]);
        assert!(bulb.drain().is_empty());
    }

    #[tokio::test]
    async fn off_keeps_color() {
        let (mut bulb, base) = setup().await;
        get_json(&base, "/set?r=0&g=255&b=0").await;

        let (_, body) = get_json(&base, "/off").await;

        assert_eq!(body, json!({"ok": true}));
        assert_eq!(
            status(&base).await,
            StatusSnapshot {
                power: false,
                rgb: [0, 255, 0]
            }
        );
        assert_eq!(bulb.drain().last(), Some(&set_pilot(&json!({"state": false}))));
    }

    #[tokio::test]
    async fn on_keeps_color() {
        let (mut bulb, base) = setup().await;
        get_json(&base, "/off").await;

        let (_, body) = get_json(&base, "/on").await;

        assert_eq!(body, json!({"ok": true}));
        assert_eq!(
            status(&base).await,
            StatusSnapshot {
                power: true,
                rgb: [120, 180, 255]
            }
        );
        assert_eq!(bulb.drain().last(), Some(&set_pilot(&json!({"state": true}))));
    }

    #[tokio::test]
    async fn white_ignores_power_flag() {
        let (mut bulb, base) = setup().await;
        get_json(&base, "/off").await;
        bulb.drain();

        let (_, body) = get_json(&base, "/white").await;

        assert_eq!(body, json!({"ok": true}));
        assert_eq!(
            status(&base).await,
            StatusSnapshot {
                power: false,
                rgb: [200, 220, 255]
            }
        );
        assert_eq!(
            bulb.drain(),
            vec![set_pilot(&json!({"state": true, "temp": 4000}))]
        );
    }

    #[tokio::test]
    async fn gating_holds_across_off_state() {
        let (_bulb, base) = setup().await;
        let before = status(&base).await.rgb;

        get_json(&base, "/off").await;
        get_json(&base, "/set?r=255&g=0&b=0").await;
        assert_eq!(status(&base).await.rgb, before);

        get_json(&base, "/on").await;
        get_json(&base, "/set?r=255&g=0&b=0").await;
        assert_eq!(status(&base).await.rgb, [255, 0, 0]);
    }
}

// ============================================================================
// Validation and failures
// ============================================================================

mod failures {
    use super::*;

    #[tokio::test]
    async fn out_of_range_channel_is_rejected() {
        let (mut bulb, base) = setup().await;

        let response = reqwest::get(format!("{base}/set?r=256&g=0&b=0")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = reqwest::get(format!("{base}/set?r=-1&g=0&b=0")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        assert_eq!(status(&base).await.rgb, [120, 180, 255]);
        assert!(bulb.drain().is_empty());
    }

    #[tokio::test]
    async fn missing_channel_is_rejected() {
        let (mut bulb, base) = setup().await;

        let response = reqwest::get(format!("{base}/set?r=1&g=2")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(bulb.drain().is_empty());
    }

    #[tokio::test]
    async fn silent_bulb_times_out() {
        let bulb = FakeBulb::spawn(BulbMode::Silent).await;
        let base = spawn_server(&bulb, Duration::from_millis(100)).await;

        let (code, body) = get_json(&base, "/off").await;

        assert_eq!(code, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body["ok"], json!(false));
        assert!(body["error"].as_str().unwrap().contains("timed out"));
        assert!(status(&base).await.power);
    }

    #[tokio::test]
    async fn disconnected_client_still_commits() {
        let mut bulb = FakeBulb::spawn(BulbMode::Slow(Duration::from_millis(200))).await;
        let base = spawn_server(&bulb, Duration::from_secs(2)).await;

        let impatient = reqwest::Client::builder()
            .timeout(Duration::from_millis(50))
            .build()
            .unwrap();
        let result = impatient.get(format!("{base}/set?r=255&g=0&b=0")).send().await;
        assert!(result.is_err());

        tokio::time::sleep(Duration::from_millis(500)).await;

        let requests = bulb.drain();
        assert_eq!(requests, vec![set_pilot(&json!({"state": true, "r": 255, "g": 0, "b": 0}))]);
        assert_eq!(status(&base).await.rgb, [255, 0, 0]);
    }

    #[tokio::test]
    async fn rejected_command_is_bad_gateway() {
        let bulb = FakeBulb::spawn(BulbMode::Reject).await;
        let base = spawn_server(&bulb, Duration::from_secs(2)).await;

        let (code, body) = get_json(&base, "/set?r=1&g=2&b=3").await;

        assert_eq!(code, StatusCode::BAD_GATEWAY);
        assert_eq!(body["ok"], json!(false));
        assert!(body["error"].as_str().unwrap().contains("Invalid Request"));
        assert_eq!(status(&base).await.rgb, [120, 180, 255]);
    }
}

// ============================================================================
// Concurrency
// ============================================================================

mod concurrency {
    use super::*;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_sets_are_serialized() {
        const N: u8 = 8;
        let (mut bulb, base) = setup().await;

        let colors: Vec<[u8; 3]> = (0..N).map(|i| [i * 30, 255 - i * 30, i]).collect();

        let handles: Vec<_> = colors
            .iter()
            .map(|&[r, g, b]| {
                let url = format!("{base}/set?r={r}&g={g}&b={b}");
                tokio::spawn(async move { reqwest::get(url).await.unwrap().status() })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.await.unwrap(), StatusCode::OK);
        }

        let final_rgb = status(&base).await.rgb;
        assert!(colors.contains(&final_rgb));

        let requests = bulb.drain();
        assert_eq!(requests.len(), usize::from(N));

        let last = &requests[requests.len() - 1]["params"];
        assert_eq!(
            [last["r"].as_u64(), last["g"].as_u64(), last["b"].as_u64()],
            final_rgb.map(|c| Some(u64::from(c)))
        );
    }
}
