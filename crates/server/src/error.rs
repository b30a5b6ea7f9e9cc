use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pages::PageError;
use serde::{Deserialize, Serialize};

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Page registry error: {0}")]
    Page(PageError),

    #[error("Match error: {0}")]
    Match(#[from] matcher::MatchError),
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ServerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::NotFound(_) | ServerError::PageNotFound(_) => StatusCode::NOT_FOUND,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Page(_) | ServerError::Match(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            ServerError::NotFound(_) | ServerError::PageNotFound(_) => "NOT_FOUND",
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::Page(_) => "PAGE_ERROR",
            ServerError::Match(_) => "MATCH_ERROR",
        }
    }
}

impl From<PageError> for ServerError {
    fn from(err: PageError) -> Self {
        match err {
            PageError::NotFound(slug) => ServerError::PageNotFound(slug),
            other => ServerError::Page(other),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}
