//! Data structures returned by a query evaluation.

use serde::Serialize;

use crate::Badge;

/// The entity type a hit was produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HitKind {
    /// A show.
    Show,
    /// A task nested inside a show.
    Task,
    /// A standalone idea.
    Idea,
}

/// Where selecting a hit should navigate.
///
/// Carries the ids the caller needs to route; the engine itself never
/// navigates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NavTarget {
    /// Open a show.
    Show {
        /// The show to open.
        show_id: String,
    },
    /// Open a task within its owning show.
    Task {
        /// The owning show.
        show_id: String,
        /// The task within that show.
        task_id: String,
    },
    /// Open an idea.
    Idea {
        /// The idea to open.
        idea_id: String,
    },
}

/// A transient, query-specific scored projection of a corpus entity.
///
/// Hits are immutable snapshots computed fresh per evaluation; they are
/// never cached or mutated across queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hit {
    /// Unique key within one evaluation, e.g. `task:<showId>:<taskId>`.
    ///
    /// Task keys encode the owning show because task ids alone are not
    /// globally unique.
    pub key: String,
    /// The source entity type.
    pub kind: HitKind,
    /// Display title, original casing.
    pub title: String,
    /// Context line, e.g. `In Show: <show title>` for tasks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// The source entity's tags.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Relevance score; always positive for returned hits.
    pub score: u32,
    /// Classification badges in the order they were earned.
    pub badges: Vec<Badge>,
    /// Navigation target for the caller's routing layer.
    pub target: NavTarget,
}

/// The bucketed output of one query evaluation.
///
/// `top_matches` is a view over the scoped buckets, not a fourth bucket: a
/// hit may legitimately appear both there and in its own type bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    /// The globally highest-scoring hits across all scoped types, capped.
    pub top_matches: Vec<Hit>,
    /// Matching shows.
    pub shows: Vec<Hit>,
    /// Matching tasks.
    pub tasks: Vec<Hit>,
    /// Matching ideas.
    pub ideas: Vec<Hit>,
    /// Reserved scope; always empty.
    pub clients: Vec<Hit>,
}

impl SearchResults {
    /// True if any bucket or the top-matches view holds a hit.
    pub fn has_any_results(&self) -> bool {
        !(self.top_matches.is_empty()
            && self.shows.is_empty()
            && self.tasks.is_empty()
            && self.ideas.is_empty())
    }
}
