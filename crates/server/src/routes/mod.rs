//! API route handlers
//!
//! Routes are organized by functionality:
//!
//! - `health`: liveness, readiness and metrics
//! - `docs`: documentation page listing and lookup
//! - `ask`: keyword question answering
//! - `probe`: optional database diagnostics

pub mod ask;
pub mod docs;
pub mod health;
pub mod probe;

use crate::error::ServerError;
use crate::state::{ServerMetadata, ServerState};
use axum::extract::State;
use axum::http::Uri;
use axum::Json;
use std::sync::Arc;

/// Root endpoint
///
/// # Response
///
/// ```json
/// {
///   "message": "Docy AI Backend is running",
///   "version": "0.1.0",
///   "pages": 3
/// }
/// ```
pub async fn api_info(State(state): State<Arc<ServerState>>) -> Json<ServerMetadata> {
    Json(ServerMetadata {
        message: "Docy AI Backend is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        pages: state.registry.len(),
    })
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(uri.path().to_string())
}
