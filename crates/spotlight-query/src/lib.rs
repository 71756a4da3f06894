//! Query normalization and scope selection for spotlight search.
//!
//! Raw search input arrives as a free-text term plus an optionally selected
//! tag. The two are mutually exclusive: a selected tag wins and the free
//! text is ignored. This crate collapses that pair into a single
//! [`NormalizedQuery`] (or nothing, when the effective query is empty), and
//! defines the [`Scope`] filter selecting which entity types participate.
//!
//! # Example
//!
//! ```
//! use spotlight_query::{NormalizedQuery, QueryMode};
//!
//! let q = NormalizedQuery::normalize("  birthday  ", None).unwrap();
//! assert_eq!(q.text(), "birthday");
//! assert_eq!(q.mode(), QueryMode::Text);
//!
//! // Selecting a tag overrides the typed text.
//! let q = NormalizedQuery::normalize("birthday", Some("comedy")).unwrap();
//! assert_eq!(q.text(), "comedy");
//! assert_eq!(q.mode(), QueryMode::Tag);
//! ```

#![warn(missing_docs)]

mod normalize;
mod scope;

pub use normalize::{NormalizedQuery, QueryMode};
pub use scope::{Scope, ScopeParseError};
