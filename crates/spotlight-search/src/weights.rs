//! Tunable scoring constants.

use serde::Deserialize;

/// Scoring weights, the recency window, and the top-matches cap.
///
/// The defaults are the empirically chosen constants the application has
/// always used; they have no documented rationale beyond "these rank well
/// for real corpora," so they are exposed as data rather than buried as
/// literals. Deserializable so a config file can override any subset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Weights {
    /// Free text equals the title exactly.
    pub title_exact: u32,
    /// Free text is a prefix of the title.
    pub title_prefix: u32,
    /// Free text appears elsewhere in the title.
    pub title_contains: u32,
    /// Free text equals one of the entity's tags.
    pub tag_exact: u32,
    /// Free text appears inside one of the entity's tags.
    pub tag_partial: u32,
    /// Free text appears in description/notes/content with no stronger match.
    pub body: u32,
    /// Free text also appears in description/notes/content on top of a
    /// title or tag match.
    pub body_secondary: u32,
    /// A selected tag equals one of the entity's tags.
    pub selected_tag_exact: u32,
    /// A selected tag appears inside one of the entity's tags.
    pub selected_tag_partial: u32,
    /// Bonus for entities touched within the recency window.
    pub recent: u32,
    /// Recency window, in days.
    pub recent_window_days: i64,
    /// Maximum number of hits in the top-matches view.
    pub top_limit: usize,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            title_exact: 100,
            title_prefix: 80,
            title_contains: 65,
            tag_exact: 70,
            tag_partial: 45,
            body: 30,
            body_secondary: 15,
            selected_tag_exact: 90,
            selected_tag_partial: 60,
            recent: 10,
            recent_window_days: 14,
            top_limit: 6,
        }
    }
}
