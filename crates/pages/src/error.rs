use thiserror::Error;

/// Errors raised by page lookup and registry construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("page not found: {0}")]
    NotFound(String),
    #[error("duplicate page slug: {0}")]
    DuplicateSlug(String),
    #[error("page slug must not be empty")]
    EmptySlug,
    #[error("page {0} has an empty title")]
    EmptyTitle(String),
}
