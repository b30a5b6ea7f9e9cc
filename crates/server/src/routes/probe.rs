use crate::diagnostics::{probe_database, DiagnosticReport};
use crate::state::ServerState;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;

/// Report backend liveness and optional database reachability
///
/// Always answers 200; database problems are described in the body.
pub async fn test_database(State(state): State<Arc<ServerState>>) -> Json<DiagnosticReport> {
    let report = probe_database(&state.database, &state.config, state.config.probe_timeout()).await;
    Json(report)
}
