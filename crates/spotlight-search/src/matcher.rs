//! The candidate predicate gating entry into the scorer.

use spotlight_model::Searchable;
use spotlight_query::{NormalizedQuery, QueryMode};

/// Returns true if the entity qualifies for the query at all.
///
/// Tag mode requires an exact (case-insensitive) tag: a tag that merely
/// contains the selected tag as a substring does not qualify. Text mode
/// matches the lowercased query as a substring anywhere in the entity's
/// combined text fields and tags.
pub fn matches(entity: &impl Searchable, query: &NormalizedQuery) -> bool {
    let q = query.lowered();
    if q.is_empty() {
        // The normalizer never produces an empty query; kept so an empty
        // query can never mean "match everything".
        return false;
    }
    match query.mode() {
        QueryMode::Tag => entity.tags().iter().any(|tag| tag.to_lowercase() == q),
        QueryMode::Text => entity.searchable_text().contains(q),
    }
}

#[cfg(test)]
mod test {
    use spotlight_model::{Idea, Timestamps};

    use super::*;

    /// Builds an idea with the given title, description, and tags.
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

    #[test]
    fn text_matches_title_substring() {
        let e = idea("Birthday Surprise Gala", None, &[]);
        assert!(matches(&e, &text_query("surprise")));
        assert!(matches(&e, &text_query("SURPRISE")));
        assert!(!matches(&e, &text_query("zzzznotfound")));
    }

    #[test]
    fn text_matches_description_and_tags() {
        let e = idea("Gala", Some("crowd work opener"), &["Comedy"]);
        assert!(matches(&e, &text_query("crowd")));
        assert!(matches(&e, &text_query("comedy")));
    }

    #[test]
    fn text_matches_across_field_joins() {
        // Fields are joined by single spaces, so a query can span the seam
        // between title and description. Seam-only matches fire no scoring
        // clause and are filtered out during aggregation.
        let e = idea("Gala", Some("night"), &[]);
        assert!(matches(&e, &text_query("gala night")));
    }

    #[test]
    fn tag_mode_requires_exact_tag() {
        let e = idea("Gala", None, &["comedy", "Improv"]);
        assert!(matches(&e, &tag_query("comedy")));
        assert!(matches(&e, &tag_query("IMPROV")));
        // Substring of a tag does not qualify in tag mode.
        assert!(!matches(&e, &tag_query("com")));
    }

    #[test]
    fn tag_mode_ignores_title() {
        let e = idea("comedy night", None, &["music"]);
        assert!(!matches(&e, &tag_query("comedy")));
    }
}
