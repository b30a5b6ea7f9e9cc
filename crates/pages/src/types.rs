//! Page data model.

use serde::{Deserialize, Serialize};

/// A single static documentation page.
///
/// Serializes with `summary: null` when no summary is set so clients always
/// see the same four keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocPage {
    /// Unique, URL-safe identifier used in lookups and `/docs/<slug>` links.
    pub slug: String,
    /// Display name.
    pub title: String,
    /// Optional short description.
    #[serde(default)]
    pub summary: Option<String>,
    /// Markdown body.
    pub content: String,
}

impl DocPage {
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        summary: Option<&str>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            summary: summary.map(str::to_string),
            content: content.into(),
        }
    }

    /// Text searched by the answer matcher: title, summary and content joined
    /// by single spaces, lowercased. A missing summary contributes an empty
    /// string, so two spaces separate title and content in that case.
    pub fn haystack(&self) -> String {
        format!(
            "{} {} {}",
            self.title,
            self.summary.as_deref().unwrap_or(""),
            self.content
        )
        .to_lowercase()
    }

    /// Site path of the rendered page, e.g. `/docs/faq`.
    pub fn link(&self, prefix: &str) -> String {
        format!("{prefix}{}", self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haystack_lowercases_all_fields() {
        let page = DocPage::new("a", "Title", Some("Sum"), "Body TEXT");
        assert_eq!(page.haystack(), "title sum body text");
    }

    #[test]
    fn haystack_without_summary_keeps_separator() {
        let page = DocPage::new("a", "Title", None, "Body");
        assert_eq!(page.haystack(), "title  body");
    }

    #[test]
    fn serializes_missing_summary_as_null() {
        let page = DocPage::new("a", "Title", None, "Body");
        let value = serde_json::to_value(&page).unwrap();
        assert!(value["summary"].is_null());
        assert_eq!(value["slug"], "a");
    }

    #[test]
    fn link_joins_prefix_and_slug() {
        let page = DocPage::new("writing-docs", "Writing Docs", None, "");
        assert_eq!(page.link("/docs/"), "/docs/writing-docs");
    }
}
