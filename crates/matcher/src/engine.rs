use std::sync::Arc;
use std::time::Instant;

use pages::{DocPage, PageRegistry};

use crate::metrics::metrics_recorder;
use crate::types::{
    AskResponse, MatchConfig, MatchError, MatchOutcome, ANSWER_FOOTER, ANSWER_HEADER,
    EMPTY_QUESTION_ANSWER, NO_MATCH_ANSWER,
};


/// Separator between question words: Unicode whitespace plus the ASCII
/// file, group, record and unit separators (U+001C..=U+001F).
pub fn is_question_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Lowercase `question`, split it on whitespace and keep tokens of at least
/// `min_chars` characters.
pub fn keyword_tokens(question: &str, min_chars: usize) -> Vec<String> {
    question
        .to_lowercase()
        .split(is_question_whitespace)
        .filter(|token| !token.is_empty() && token.chars().count() >= min_chars)
        .map(str::to_string)
        .collect()
}

/// Keyword matcher over a shared page registry.
#[derive(Debug, Clone)]
pub struct AnswerMatcher {
    registry: Arc<PageRegistry>,
    config: MatchConfig,
    // Lowercased haystack per page, aligned with registry order.
    haystacks: Vec<String>,
}

impl AnswerMatcher {
    /// Matcher with default configuration.
    pub fn new(registry: Arc<PageRegistry>) -> Self {
        Self::build(registry, MatchConfig::default())
    }

    /// Matcher with explicit configuration; rejects invalid configs.
    pub fn with_config(registry: Arc<PageRegistry>, config: MatchConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self::build(registry, config))
    }

    fn build(registry: Arc<PageRegistry>, config: MatchConfig) -> Self {
        let haystacks = registry.iter().map(DocPage::haystack).collect();
        Self {
            registry,
            config,
            haystacks,
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn registry(&self) -> &Arc<PageRegistry> {
        &self.registry
    }

    /// Pages whose haystack contains any of `tokens`, in registry order.
    pub fn matching_pages<'a>(&'a self, tokens: &[String]) -> Vec<&'a DocPage> {
        if tokens.is_empty() {
            return Vec::new();
        }
        self.registry
            .iter()
            .zip(&self.haystacks)
            .filter(|(_, hay)| tokens.iter().any(|token| hay.contains(token.as_str())))
            .map(|(page, _)| page)
            .collect()
    }

    /// Answer a free-text question. Never fails; blank questions and misses
    /// produce fixed prompts with no sources.
    pub fn ask(&self, question: &str) -> AskResponse {
        let start = Instant::now();
        let (response, outcome) = self.resolve(question);

        tracing::debug!(
            outcome = outcome.as_str(),
            sources = response.sources.len(),
            "answered question"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_ask(start.elapsed(), outcome);
        }

        response
    }

    fn resolve(&self, question: &str) -> (AskResponse, MatchOutcome) {
        let question = question.trim_matches(is_question_whitespace);
        if question.is_empty() {
            return (
                AskResponse::without_sources(EMPTY_QUESTION_ANSWER),
                MatchOutcome::Empty,
            );
        }

        let tokens = keyword_tokens(question, self.config.min_token_chars);
        let matches = self.matching_pages(&tokens);
        if matches.is_empty() {
            return (
                AskResponse::without_sources(NO_MATCH_ANSWER),
                MatchOutcome::NoMatch,
            );
        }

        let cited = &matches[..matches.len().min(self.config.max_sources)];
        let prefix = self.config.link_prefix.as_str();
        let tips = cited
            .iter()
            .map(|page| format!("- {} ({})", page.title, page.link(prefix)))
            .collect::<Vec<_>>()
            .join("\n");
        let sources: Vec<String> = cited.iter().map(|page| page.link(prefix)).collect();
        let outcome = MatchOutcome::Matched(sources.len());

        (
            AskResponse {
                answer: format!("{ANSWER_HEADER}\n\n{tips}\n\n{ANSWER_FOOTER}"),
                sources,
            },
            outcome,
        )
    }
}
