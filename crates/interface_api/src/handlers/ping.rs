//! Liveness ping/pong handlers

use std::sync::atomic::Ordering;

use axum::{extract::State, Json};

use crate::dto::ping::PingPong;
use crate::AppState;

/// Answers `Pong N`, where N counts the pings served by this process
pub async fn ping(State(state): State<AppState>) -> Json<PingPong> {
    let count = state.ping_counter.fetch_add(1, Ordering::Relaxed) + 1;
    Json(PingPong {
        result: format!("Pong {}", count),
    })
}

/// Answers `Ping`
pub async fn pong() -> Json<PingPong> {
    Json(PingPong {
        result: "Ping".to_string(),
    })
}
