use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prompt returned when the question is empty after trimming.
pub const EMPTY_QUESTION_ANSWER: &str = "Please provide a question.";

/// Returned when no page matches any token.
pub const NO_MATCH_ANSWER: &str = "I couldn't find an exact match in the docs. \
Try rephrasing your question or browse the sections from the sidebar.";

pub(crate) const ANSWER_HEADER: &str =
    "Here are some details I found in the documentation that may help:";
pub(crate) const ANSWER_FOOTER: &str = "Open one of these pages for a deeper dive.";

/// Body of `POST /api/ask`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AskRequest {
    pub question: String,
}

/// Answer text plus the site paths it was built from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AskResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<String>,
}

impl AskResponse {
    pub(crate) fn without_sources(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            sources: Vec::new(),
        }
    }
}

/// How a question was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Question was blank after trimming.
    Empty,
    /// At least one page matched; carries the number of sources returned.
    Matched(usize),
    /// Tokens survived filtering but none matched, or every token was too short.
    NoMatch,
}

impl MatchOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOutcome::Empty => "empty",
            MatchOutcome::Matched(_) => "matched",
            MatchOutcome::NoMatch => "no_match",
        }
    }
}

/// Errors raised while configuring the matcher.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("invalid match configuration: {0}")]
    InvalidConfig(String),
}

/// Tunables for [`crate::AnswerMatcher`].
///
/// Defaults reproduce the site's established behavior: tokens of three
/// characters or fewer are ignored, at most three sources are returned and
/// links point under `/docs/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchConfig {
    /// Minimum token length in characters; shorter tokens are discarded.
    #[serde(default = "MatchConfig::default_min_token_chars")]
    pub min_token_chars: usize,
    /// Maximum number of pages cited in one answer.
    #[serde(default = "MatchConfig::default_max_sources")]
    pub max_sources: usize,
    /// Path prefix prepended to slugs when building links.
    #[serde(default = "MatchConfig::default_link_prefix")]
    pub link_prefix: String,
}

impl MatchConfig {
    pub(crate) fn default_min_token_chars() -> usize {
        4
    }

    pub(crate) fn default_max_sources() -> usize {
        3
    }

    pub(crate) fn default_link_prefix() -> String {
        "/docs/".to_string()
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if self.max_sources == 0 {
            return Err(MatchError::InvalidConfig(
                "max_sources must be greater than zero".into(),
            ));
        }
        if self.link_prefix.trim().is_empty() {
            return Err(MatchError::InvalidConfig(
                "link_prefix must not be empty".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            min_token_chars: Self::default_min_token_chars(),
            max_sources: Self::default_max_sources(),
            link_prefix: Self::default_link_prefix(),
        }
    }
}
