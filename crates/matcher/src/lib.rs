//! # Docy Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` answers free-text questions about the documentation by keyword
//! overlap against the [`pages::PageRegistry`]. There is no language model
//! behind it: the question is lowercased and split on whitespace, short
//! tokens are dropped, and every page whose haystack (title, summary and
//! content) contains one of the remaining tokens as a substring is a hit.
//! The first few hits, in registry order, are rendered into a templated
//! answer together with their `/docs/<slug>` links.
//!
//! The heuristic is intentionally crude. Substring containment means a token
//! can match inside an unrelated longer word, and that behavior is kept.
//!
//! ## Core Types
//!
//! - [`AnswerMatcher`]: holds the registry and a validated [`MatchConfig`].
//! - [`AskRequest`] / [`AskResponse`]: request and response bodies.
//! - [`MatchOutcome`]: how a question was resolved, reported to metrics.
//! - [`MatchError`]: configuration validation failures.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::AnswerMatcher;
//! use pages::PageRegistry;
//!
//! let matcher = AnswerMatcher::new(PageRegistry::builtin());
//!
//! let response = matcher.ask("getting started");
//! assert!(response.sources.contains(&"/docs/getting-started".to_string()));
//!
//! let empty = matcher.ask("   ");
//! assert_eq!(empty.answer, "Please provide a question.");
//! assert!(empty.sources.is_empty());
//! ```
//!
//! ## Observability
//!
//! Install a [`MatchMetrics`] implementation via [`set_match_metrics`] to
//! record latency and outcome of every [`AnswerMatcher::ask`] call. This is
//! typically done once during service startup.

pub mod engine;
pub mod metrics;
pub mod types;

pub use crate::engine::{is_question_whitespace, keyword_tokens, AnswerMatcher};
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::types::{AskRequest, AskResponse, MatchConfig, MatchError, MatchOutcome};
