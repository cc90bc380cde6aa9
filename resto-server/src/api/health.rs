//! Health check endpoint

use axum::routing::get;
use axum::{Json, Router};
use shared::response::HealthResponse;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        service: "resto-server".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}
