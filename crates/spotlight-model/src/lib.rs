//! Corpus entity types for spotlight search.
//!
//! This crate defines the three entity shapes the search engine scans —
//! shows, the tasks nested inside them, and standalone ideas — plus the
//! [`Searchable`] capability trait that gives the engine a uniform view of
//! their text fields, and [`Corpus`] loading from JSON snapshots.
//!
//! The engine never mutates these types: a corpus is an immutable snapshot
//! owned by the caller for the duration of one query evaluation.

#![warn(missing_docs)]

mod corpus;
mod entity;
mod error;
mod searchable;

pub use corpus::Corpus;
pub use entity::{Idea, Show, Task, Timestamps};
pub use error::CorpusError;
pub use searchable::Searchable;
