//! Relevance scoring and badge classification.
//!
//! Scores accumulate additively across independent signals (title, tags,
//! body text, recency); each signal also contributes at most one badge.
//! Only entities that already passed the candidate matcher reach this
//! module, but nothing here assumes a match was found.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use spotlight_model::Searchable;
use spotlight_query::{NormalizedQuery, QueryMode};

use crate::Weights;

/// A short classification label explaining why a hit matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    /// The query exactly equals the title or a tag.
    ExactMatch,
    /// The query partially matches the title or a tag.
    Related,
    /// The query only appears in secondary text (description/notes/content).
    Suggested,
    /// The entity was touched within the recency window.
    Recent,
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ExactMatch => "Exact Match",
            Self::Related => "Related",
            Self::Suggested => "Suggested",
            Self::Recent => "Recent",
        };
        write!(f, "{label}")
    }
}

/// The scorer's verdict for one entity: a numeric score and the ordered set
/// of badges that earned it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Match {
    /// Accumulated relevance score; zero means no signal fired.
    pub score: u32,
    /// Badges in the order they were earned, each at most once.
    pub badges: Vec<Badge>,
}

/// Pushes a badge unless it is already present.
fn push_badge(badges: &mut Vec<Badge>, badge: Badge) {
    if !badges.contains(&badge) {
        badges.push(badge);
    }
}

/// Scores and classifies one entity against the query.
///
/// Deterministic in `(entity, query, now, weights)`. The caller passes the
/// evaluation's single `now` so every entity in one pass sees the same
/// clock.
pub fn classify(
    entity: &impl Searchable,
    query: &NormalizedQuery,
    now: DateTime<Utc>,
    weights: &Weights,
) -> Match {
    let mut m = Match::default();
    match query.mode() {
        QueryMode::Tag => score_selected_tag(entity, query, weights, &mut m),
        QueryMode::Text => score_text(entity, query, weights, &mut m),
    }

    // Recency applies in both modes, after the match signals. A configured
    // window outside chrono's representable range disables the bonus.
    if let Some(ts) = entity.timestamp()
        && let Some(window) = Duration::try_days(weights.recent_window_days)
        && now.signed_duration_since(ts) <= window
    {
        push_badge(&mut m.badges, Badge::Recent);
        m.score += weights.recent;
    }

    // A positive score must always carry at least one badge; this fires when
    // only the recency bonus contributed.
    if m.score > 0 && m.badges.is_empty() {
        m.badges.push(Badge::Suggested);
    }
    m
}

/// Tag-selection scoring: exact tag membership, or (for forward
/// compatibility with partial tag candidates) a tag containing the query.
fn score_selected_tag(
    entity: &impl Searchable,
    query: &NormalizedQuery,
    weights: &Weights,
    m: &mut Match,
) {
    let q = query.lowered();
    let lowered: Vec<String> = entity.tags().iter().map(|t| t.to_lowercase()).collect();
    if lowered.iter().any(|t| t == q) {
        push_badge(&mut m.badges, Badge::ExactMatch);
        m.score += weights.selected_tag_exact;
    } else if lowered.iter().any(|t| t.contains(q)) {
        push_badge(&mut m.badges, Badge::Related);
        m.score += weights.selected_tag_partial;
    }
}

/// Free-text scoring: title signals, then tag signals, then body text.
fn score_text(
    entity: &impl Searchable,
    query: &NormalizedQuery,
    weights: &Weights,
    m: &mut Match,
) {
    let q = query.lowered();
    let title = entity.title().to_lowercase();
    if title == q {
        push_badge(&mut m.badges, Badge::ExactMatch);
        m.score += weights.title_exact;
    } else if title.starts_with(q) {
        push_badge(&mut m.badges, Badge::Related);
        m.score += weights.title_prefix;
    } else if title.contains(q) {
        push_badge(&mut m.badges, Badge::Related);
        m.score += weights.title_contains;
    }

    let lowered: Vec<String> = entity.tags().iter().map(|t| t.to_lowercase()).collect();
    if lowered.iter().any(|t| t == q) {
        push_badge(&mut m.badges, Badge::ExactMatch);
        m.score += weights.tag_exact;
    } else if lowered.iter().any(|t| t.contains(q)) {
        push_badge(&mut m.badges, Badge::Related);
        m.score += weights.tag_partial;
    }

    let body_hit = [entity.description(), entity.notes(), entity.content()]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(q));
    if body_hit {
        if m.badges.is_empty() {
            m.badges.push(Badge::Suggested);
            m.score += weights.body;
        } else {
            // Body text corroborates a stronger match: score only.
            m.score += weights.body_secondary;
        }
    }
}

#[cfg(test)]
mod test {
    use chrono::TimeZone;
    use spotlight_model::{Idea, Task, Timestamps};

    use super::*;

    /// Fixed evaluation clock for deterministic recency tests.
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap()
    }

    /// Builds an idea with the given fields.
    fn idea(title: &str, description: Option<&str>, tags: &[&str]) -> Idea {
        Idea {
            id: "i1".to_string(),
            title: title.to_string(),
            description: description.map(str::to_string),
            content: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            timestamps: Timestamps::default(),
        }
    }

    /// Normalizes a free-text query.
    fn text_query(q: &str) -> NormalizedQuery {
        NormalizedQuery::normalize(q, None).unwrap()
    }

    /// Normalizes a tag-selection query.
    fn tag_query(q: &str) -> NormalizedQuery {
        NormalizedQuery::normalize("", Some(q)).unwrap()
    }

    /// Classifies with default weights.
    fn run(entity: &impl Searchable, query: &NormalizedQuery) -> Match {
        classify(entity, query, now(), &Weights::default())
    }

    #[test]
    fn title_exact_scores_highest() {
        let m = run(&idea("Birthday Gala", None, &[]), &text_query("birthday gala"));
        assert_eq!(m.score, 100);
        assert_eq!(m.badges, vec![Badge::ExactMatch]);
    }

    #[test]
    fn title_prefix_beats_contains() {
        let prefix = run(&idea("Birthday Gala", None, &[]), &text_query("birthday"));
        assert_eq!(prefix.score, 80);
        assert_eq!(prefix.badges, vec![Badge::Related]);

        let contains = run(&idea("Birthday Gala", None, &[]), &text_query("gala"));
        assert_eq!(contains.score, 65);
        assert_eq!(contains.badges, vec![Badge::Related]);
    }

    #[test]
    fn tag_signals_stack_with_title() {
        // Title prefix (80) + exact tag (70).
        let m = run(&idea("Comedy Night", None, &["comedy"]), &text_query("comedy"));
        assert_eq!(m.score, 150);
        assert_eq!(m.badges, vec![Badge::Related, Badge::ExactMatch]);
    }

    #[test]
    fn partial_tag_adds_related_once() {
        // Title contains (65) + partial tag (45); Related is not duplicated.
        let m = run(
            &idea("Open Mic Comedy", None, &["comedy-night"]),
            &text_query("comedy"),
        );
        assert_eq!(m.score, 110);
        assert_eq!(m.badges, vec![Badge::Related]);
    }

    #[test]
    fn body_only_match_is_suggested() {
        let m = run(
            &idea("Gala", Some("a birthday celebration"), &[]),
            &text_query("birthday"),
        );
        assert_eq!(m.score, 30);
        assert_eq!(m.badges, vec![Badge::Suggested]);
    }

    #[test]
    fn body_corroboration_scores_without_badge() {
        // Title prefix (80) + body secondary (15).
        let m = run(
            &idea("Birthday Gala", Some("birthday plans"), &[]),
            &text_query("birthday"),
        );
        assert_eq!(m.score, 95);
        assert_eq!(m.badges, vec![Badge::Related]);
    }

    #[test]
    fn selected_tag_exact() {
        let m = run(&idea("Gala", None, &["Comedy"]), &tag_query("comedy"));
        assert_eq!(m.score, 90);
        assert_eq!(m.badges, vec![Badge::ExactMatch]);
    }

    #[test]
    fn selected_tag_partial_branch() {
        // Unreachable through the matcher today but must still classify.
        let m = run(&idea("Gala", None, &["comedy-night"]), &tag_query("comedy"));
        assert_eq!(m.score, 60);
        assert_eq!(m.badges, vec![Badge::Related]);
    }

    #[test]
    fn recency_bonus_applies_in_window() {
        let task = Task {
            id: "t1".to_string(),
            title: "Reset tables".to_string(),
            notes: None,
            tags: vec![],
            timestamps: Timestamps {
                created_at: Some(now() - Duration::days(1)),
                ..Timestamps::default()
            },
        };
        let m = run(&task, &text_query("reset"));
        assert_eq!(m.score, 90);
        assert_eq!(m.badges, vec![Badge::Related, Badge::Recent]);
    }

    #[test]
    fn recency_window_boundary() {
        let mut task = Task {
            id: "t1".to_string(),
            title: "Reset tables".to_string(),
            notes: None,
            tags: vec![],
            timestamps: Timestamps {
                updated_at: Some(now() - Duration::days(14)),
                ..Timestamps::default()
            },
        };
        // Exactly 14 days old still counts.
        assert!(run(&task, &text_query("reset")).badges.contains(&Badge::Recent));

        task.timestamps.updated_at = Some(now() - Duration::days(15));
        assert!(!run(&task, &text_query("reset")).badges.contains(&Badge::Recent));
    }

    #[test]
    fn out_of_range_recency_window_disables_bonus() {
        let recent = Idea {
            timestamps: Timestamps {
                updated_at: Some(now()),
                ..Timestamps::default()
            },
            ..idea("Birthday Gala", None, &[])
        };
        let weights = Weights {
            recent_window_days: i64::MAX,
            ..Weights::default()
        };

        // Must not panic; the bonus simply does not apply.
        let m = classify(&recent, &text_query("birthday"), now(), &weights);
        assert!(!m.badges.contains(&Badge::Recent));
        assert_eq!(m.score, 80);
    }

    #[test]
    fn recency_only_match_keeps_badge() {
        // In tag mode with no tag signal, only the recency bonus fires;
        // positive scores must still carry a badge.
        let recent = Idea {
            timestamps: Timestamps {
                updated_at: Some(now()),
                ..Timestamps::default()
            },
            ..idea("Gala", None, &[])
        };
        let m = run(&recent, &tag_query("comedy"));
        assert_eq!(m.score, 10);
        assert_eq!(m.badges, vec![Badge::Recent]);
    }

    #[test]
    fn no_signal_means_empty_match() {
        let m = run(&idea("Gala", None, &[]), &tag_query("comedy"));
        assert_eq!(m, Match::default());
    }
}
