//! Bundled documentation content.

use crate::types::DocPage;

/// Pages shipped with the site, in sidebar order.
pub fn builtin_pages() -> Vec<DocPage> {
    vec![
        DocPage::new(
            "getting-started",
            "Getting Started",
            Some("Quick intro to Docy AI Documentation site."),
            concat!(
                "# Getting Started\n\n",
                "Welcome to Docy AI Documentation. This site showcases a clean docs experience ",
                "with a built-in AI helper. Use the sidebar to browse topics or ask the AI a question.\n\n",
                "- Navigate through topics\n- Use the search to find content\n- Open the chat bubble to ask anything about the docs\n",
            ),
        ),
        DocPage::new(
            "writing-docs",
            "Writing Docs",
            Some("Structure and style guidelines."),
            concat!(
                "# Writing Docs\n\n",
                "Keep content concise, add headings, and prefer examples.\n\n",
                "## Tips\n- One idea per section\n- Use bullet points\n- Provide code where helpful\n",
            ),
        ),
        DocPage::new(
            "faq",
            "FAQ",
            Some("Common questions and answers."),
            concat!(
                "# FAQ\n\n",
                "**What is Docy AI?**\n\n",
                "A friendly documentation experience with an AI helper to guide readers.\n\n",
                "**Does it need a database?**\n\n",
                "For static docs, no. For user content or analytics, yes.\n",
            ),
        ),
    ]
}
