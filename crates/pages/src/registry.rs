//! Immutable, slug-unique page collection.

use std::collections::HashSet;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::builtin::builtin_pages;
use crate::error::PageError;
use crate::types::DocPage;

static BUILTIN: Lazy<Arc<PageRegistry>> = Lazy::new(|| {
    Arc::new(PageRegistry::new(builtin_pages()).unwrap_or_else(|err| {
        panic!("bundled documentation pages are invalid: {err}");
    }))
});

/// Ordered set of documentation pages.
///
/// Iteration order is definition order. It decides sidebar order and the
/// order in which the answer matcher reports hits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRegistry {
    pages: Vec<DocPage>,
}

impl PageRegistry {
    /// Validate and wrap a list of pages.
    ///
    /// Rejects empty slugs, empty titles and duplicate slugs.
    pub fn new(pages: Vec<DocPage>) -> Result<Self, PageError> {
        {
            let mut seen = HashSet::with_capacity(pages.len());
            for page in &pages {
                if page.slug.trim().is_empty() {
                    return Err(PageError::EmptySlug);
                }
                if page.title.trim().is_empty() {
                    return Err(PageError::EmptyTitle(page.slug.clone()));
                }
                if !seen.insert(page.slug.as_str()) {
                    return Err(PageError::DuplicateSlug(page.slug.clone()));
                }
            }
        }
        tracing::debug!(pages = pages.len(), "page registry built");
        Ok(Self { pages })
    }

    /// Shared handle to the bundled site content.
    pub fn builtin() -> Arc<PageRegistry> {
        Arc::clone(&BUILTIN)
    }

    /// All pages in definition order.
    pub fn list_pages(&self) -> &[DocPage] {
        &self.pages
    }

    /// Exact, case-sensitive slug lookup.
    pub fn get_page(&self, slug: &str) -> Result<&DocPage, PageError> {
        self.pages
            .iter()
            .find(|page| page.slug == slug)
            .ok_or_else(|| PageError::NotFound(slug.to_string()))
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocPage> {
        self.pages.iter()
    }
}

impl<'a> IntoIterator for &'a PageRegistry {
    type Item = &'a DocPage;
    type IntoIter = std::slice::Iter<'a, DocPage>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}
