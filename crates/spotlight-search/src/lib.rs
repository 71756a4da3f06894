//! Relevance ranking and match classification engine for spotlight.
//!
//! Given an in-memory corpus of shows (with nested tasks) and ideas plus one
//! normalized query, the engine decides which entities qualify, scores each
//! with additive heuristics, classifies the match with human-readable
//! badges, and buckets the resulting hits by entity type plus a global
//! top-matches view.
//!
//! The whole pipeline is a pure function of `(corpus, query, scope, now,
//! weights)`: no internal state, no I/O, recomputed from scratch on every
//! input change.
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use spotlight_model::{Corpus, Show, Timestamps};
//! use spotlight_query::Scope;
//! use spotlight_search::{Weights, evaluate};
//!
//! let corpus = Corpus {
//!     shows: vec![Show {
//!         id: "s1".to_string(),
//!         title: "Birthday Surprise Gala".to_string(),
//!         description: None,
//!         tags: vec!["comedy".to_string()],
//!         tasks: vec![],
//!         timestamps: Timestamps::default(),
//!     }],
//!     ideas: vec![],
//! };
//!
//! let results = evaluate(&corpus, "birthday", None, Scope::All, Utc::now(), &Weights::default())
//!     .expect("non-empty query");
//! assert_eq!(results.shows.len(), 1);
//! assert!(results.shows[0].score >= 80);
//! ```

#![warn(missing_docs)]

mod aggregate;
mod hit;
mod matcher;
mod score;
mod weights;

pub use aggregate::{evaluate, evaluate_query};
pub use hit::{Hit, HitKind, NavTarget, SearchResults};
pub use matcher::matches;
pub use score::{Badge, Match, classify};
pub use weights::Weights;
