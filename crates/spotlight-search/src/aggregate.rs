//! Running the matcher and scorer over the whole corpus.

use chrono::{DateTime, Utc};
use spotlight_model::{Corpus, Searchable};
use spotlight_query::{NormalizedQuery, Scope};

use crate::{
    Weights,
    hit::{Hit, HitKind, NavTarget, SearchResults},
    matcher, score,
};

/// Evaluates raw search input against the corpus.
///
/// Normalizes the input first; returns `None` when the effective query is
/// empty, in which case the caller renders the tag-browsing view instead of
/// a result list.
pub fn evaluate(
    corpus: &Corpus,
    search_term: &str,
    selected_tag: Option<&str>,
    scope: Scope,
    now: DateTime<Utc>,
    weights: &Weights,
) -> Option<SearchResults> {
    let query = NormalizedQuery::normalize(search_term, selected_tag)?;
    Some(evaluate_query(corpus, &query, scope, now, weights))
}

/// Evaluates an already-normalized query against the corpus.
///
/// Buckets outside the scope are skipped entirely rather than scored and
/// discarded; the observable behavior is the same (an empty bucket).
pub fn evaluate_query(
    corpus: &Corpus,
    query: &NormalizedQuery,
    scope: Scope,
    now: DateTime<Utc>,
    weights: &Weights,
) -> SearchResults {
    let mut shows = Vec::new();
    let mut tasks = Vec::new();
    let mut ideas = Vec::new();

    if scope.includes(Scope::Shows) {
        for show in &corpus.shows {
            if let Some(m) = classify_candidate(show, query, now, weights) {
                shows.push(Hit {
                    key: format!("show:{}", show.id),
                    kind: HitKind::Show,
                    title: show.title.clone(),
                    subtitle: None,
                    tags: show.tags.clone(),
                    score: m.score,
                    badges: m.badges,
                    target: NavTarget::Show {
                        show_id: show.id.clone(),
                    },
                });
            }
        }
    }

    if scope.includes(Scope::Tasks) {
        for show in &corpus.shows {
            for task in &show.tasks {
                if let Some(m) = classify_candidate(task, query, now, weights) {
                    tasks.push(Hit {
                        key: format!("task:{}:{}", show.id, task.id),
                        kind: HitKind::Task,
                        title: task.title.clone(),
                        subtitle: Some(format!("In Show: {}", show.title)),
                        tags: task.tags.clone(),
                        score: m.score,
                        badges: m.badges,
                        target: NavTarget::Task {
                            show_id: show.id.clone(),
                            task_id: task.id.clone(),
                        },
                    });
                }
            }
        }
    }

    if scope.includes(Scope::Ideas) {
        for idea in &corpus.ideas {
            if let Some(m) = classify_candidate(idea, query, now, weights) {
                ideas.push(Hit {
                    key: format!("idea:{}", idea.id),
                    kind: HitKind::Idea,
                    title: idea.title.clone(),
                    subtitle: None,
                    tags: idea.tags.clone(),
                    score: m.score,
                    badges: m.badges,
                    target: NavTarget::Idea {
                        idea_id: idea.id.clone(),
                    },
                });
            }
        }
    }

    sort_bucket(&mut shows);
    sort_bucket(&mut tasks);
    sort_bucket(&mut ideas);

    // Fixed concatenation order before the final sort keeps tie-breaking
    // deterministic across runs.
    let mut top_matches: Vec<Hit> = shows
        .iter()
        .chain(tasks.iter())
        .chain(ideas.iter())
        .cloned()
        .collect();
    sort_bucket(&mut top_matches);
    top_matches.truncate(weights.top_limit);

    SearchResults {
        top_matches,
        shows,
        tasks,
        ideas,
        clients: Vec::new(),
    }
}

/// Gates one entity through the matcher and, if it qualifies, scores it.
///
/// A candidate can pass the matcher without any scoring clause firing: the
/// matcher's haystack joins fields with spaces, so a query can span the seam
/// between two fields that no individual signal inspects. Such zero-signal
/// matches carry nothing renderable and are dropped here, keeping every
/// returned hit at a positive score with at least one badge.
fn classify_candidate(
    entity: &impl Searchable,
    query: &NormalizedQuery,
    now: DateTime<Utc>,
    weights: &Weights,
) -> Option<score::Match> {
    if !matcher::matches(entity, query) {
        return None;
    }
    let m = score::classify(entity, query, now, weights);
    if m.score == 0 {
        return None;
    }
    Some(m)
}

/// Sorts hits by score descending, then title ascending.
///
/// Titles compare byte-lexicographically as supplied by the source data;
/// any total, deterministic order satisfies the contract.
fn sort_bucket(hits: &mut [Hit]) {
    hits.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.title.cmp(&b.title)));
}
