//! # Docy Pages (`pages`)
//!
//! ## Purpose
//!
//! `pages` owns the static documentation content served by Docy. Pages are
//! defined once at process start, validated into a [`PageRegistry`], and
//! never mutated afterwards. Every other component reads the registry through
//! a shared `Arc` handle, so no synchronization is needed.
//!
//! ## Core Types
//!
//! - [`DocPage`]: one documentation page (`slug`, `title`, optional `summary`,
//!   markdown `content`).
//! - [`PageRegistry`]: ordered, slug-unique collection with list/lookup access.
//! - [`PageError`]: lookup and registry construction failures.
//!
//! ## Example Usage
//!
//! ```
//! use pages::{PageError, PageRegistry};
//!
//! let registry = PageRegistry::builtin();
//! assert_eq!(registry.list_pages().len(), 3);
//!
//! let page = registry.get_page("faq").expect("faq is built in");
//! assert_eq!(page.title, "FAQ");
//!
//! assert!(matches!(
//!     registry.get_page("missing"),
//!     Err(PageError::NotFound(_))
//! ));
//! ```

pub mod builtin;
pub mod error;
pub mod registry;
pub mod types;

pub use crate::error::PageError;
pub use crate::registry::PageRegistry;
pub use crate::types::DocPage;
