use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use matcher::{AskRequest, AskResponse};
use std::sync::Arc;

/// Answer a question from the documentation
///
/// Blank questions and questions with no keyword hits still return 200 with a
/// fixed prompt and an empty `sources` list. Only a malformed body is an error.
pub async fn ask(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> ServerResult<Json<AskResponse>> {
    let Json(request) = payload.map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;
    Ok(Json(state.matcher.ask(&request.question)))
}
