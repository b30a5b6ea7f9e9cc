use crate::error::ServerResult;
use crate::state::ServerState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use pages::DocPage;
use std::sync::Arc;

/// List every documentation page in sidebar order
pub async fn list_pages(State(state): State<Arc<ServerState>>) -> Json<Vec<DocPage>> {
    Json(state.registry.list_pages().to_vec())
}

/// Fetch one page by its exact slug
///
/// Unknown slugs produce a 404 with the standard error body.
pub async fn get_page(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> ServerResult<impl IntoResponse> {
    let page = state.registry.get_page(&slug)?;
    Ok(Json(page.clone()))
}
