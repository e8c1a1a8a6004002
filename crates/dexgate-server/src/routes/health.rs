//! Service info and health endpoints.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use dexgate_core::UtcDateTime;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: UtcDateTime,
    pub uptime_seconds: u64,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<&'static str>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(info))
        .route("/health", get(health))
}

async fn info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        endpoints: vec![
            "GET /health",
            "GET /creatures?limit&offset",
            "GET /creatures/search?query",
            "GET /creatures/:identifier",
            "GET /favorites?include=creature",
            "GET /favorites/count",
            "GET /favorites/:id",
            "POST /favorites",
            "DELETE /favorites/:id",
            "DELETE /favorites",
        ],
    })
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: UtcDateTime::now(),
        uptime_seconds: state.uptime().as_secs(),
    })
}
