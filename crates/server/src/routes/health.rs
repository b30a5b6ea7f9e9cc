use crate::state::ServerState;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use std::time::SystemTime;

/// Global server start time for uptime calculation
static SERVER_START_TIME: once_cell::sync::Lazy<SystemTime> =
    once_cell::sync::Lazy::new(SystemTime::now);

fn uptime_seconds() -> u64 {
    SERVER_START_TIME
        .elapsed()
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Health check endpoint (liveness)
/// Returns 200 if server is running
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "docy-server",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": uptime_seconds(),
    }))
}

/// Readiness check endpoint
///
/// The site is ready as soon as the page registry is loaded. The database
/// state is informational; the site does not depend on it.
pub async fn readiness_check(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let pages = if state.registry.is_empty() { "empty" } else { "ready" };

    Json(json!({
        "status": "ready",
        "service": "docy-server",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": uptime_seconds(),
        "components": {
            "api": "ready",
            "pages": pages,
            "page_count": state.registry.len(),
            "matcher": "ready",
            "database": state.database.label(),
        }
    }))
}

/// Prometheus metrics endpoint
///
/// Falls back to a small JSON document when no recorder is installed.
pub async fn metrics(State(state): State<Arc<ServerState>>) -> Response {
    match &state.metrics {
        Some(handle) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => Json(json!({ "uptime_seconds": uptime_seconds() })).into_response(),
    }
}
