//! spotlight: global search for a performer's project data.
//!
//! Performers accumulate shows, the tasks inside them, and loose ideas.
//! spotlight scans a JSON snapshot of that corpus and ranks everything that
//! matches a free-text query or a selected tag, classifying each hit with
//! short badges (Exact Match, Related, Suggested, Recent) and surfacing a
//! global top-matches view alongside per-type buckets.

#![warn(missing_docs)]

pub mod cli;
