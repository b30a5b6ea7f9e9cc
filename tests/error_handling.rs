use std::sync::Arc;

use docy::{AnswerMatcher, DocPage, MatchConfig, MatchError, PageError, PageRegistry};

#[test]
fn unknown_slug_returns_not_found() {
    let result = docy::get_page("getting-started-guide");
    assert_eq!(
        result,
        Err(PageError::NotFound("getting-started-guide".into()))
    );
}

#[test]
fn duplicate_slugs_are_rejected_at_construction() {
    let result = PageRegistry::new(vec![
        DocPage::new("intro", "Intro", None, "a"),
        DocPage::new("intro", "Intro again", None, "b"),
    ]);
    assert!(matches!(result, Err(PageError::DuplicateSlug(slug)) if slug == "intro"));
}

#[test]
fn invalid_match_config_is_rejected() {
    let config = MatchConfig {
        link_prefix: String::new(),
        ..Default::default()
    };
    let result = AnswerMatcher::with_config(PageRegistry::builtin(), config);
    assert!(matches!(result, Err(MatchError::InvalidConfig(_))));
}

#[test]
fn odd_questions_degrade_gracefully() {
    let matcher = AnswerMatcher::new(Arc::new(
        PageRegistry::new(vec![DocPage::new("only", "Only", None, "content")]).unwrap(),
    ));
    let long = "a".repeat(10_000);
    for question in ["", "\u{0}", "🚀🚀🚀🚀", long.as_str(), "?!?!"] {
        let response = matcher.ask(question);
        assert!(!response.answer.is_empty());
        assert!(response.sources.len() <= 3);
    }
}
