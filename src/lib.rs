//! Workspace umbrella crate for the Docy documentation backend.
//!
//! This crate stitches the page registry and the answer matcher together so
//! callers can work with the bundled documentation through a single API
//! entry point. The HTTP surface lives in the `docy-server` crate.

pub use matcher::{
    keyword_tokens, set_match_metrics, AnswerMatcher, AskRequest, AskResponse, MatchConfig,
    MatchError, MatchMetrics, MatchOutcome,
};
pub use pages::{DocPage, PageError, PageRegistry};

use std::sync::OnceLock;

/// All bundled pages in sidebar order.
pub fn list_pages() -> Vec<DocPage> {
    PageRegistry::builtin().list_pages().to_vec()
}

/// Look up a bundled page by exact slug.
pub fn get_page(slug: &str) -> Result<DocPage, PageError> {
    PageRegistry::builtin().get_page(slug).cloned()
}

/// Answer a question against the bundled pages with default settings.
pub fn ask(question: &str) -> AskResponse {
    builtin_matcher().ask(question)
}

fn builtin_matcher() -> &'static AnswerMatcher {
    static MATCHER: OnceLock<AnswerMatcher> = OnceLock::new();
    MATCHER.get_or_init(|| AnswerMatcher::new(PageRegistry::builtin()))
}
