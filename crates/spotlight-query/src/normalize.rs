//! Collapsing raw search input into a single normalized query.

/// How the active query was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    /// The user selected a tag; the query is the tag text, matched exactly
    /// against entity tags.
    Tag,
    /// The user typed free text; the query is matched as a substring across
    /// entity text fields.
    Text,
}

/// A non-empty, trimmed query with its mode and a cached lowercase form.
///
/// Built once per evaluation via [`NormalizedQuery::normalize`]; everything
/// downstream (matcher, scorer, highlighter) reads from this rather than
/// re-deriving the query from raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    /// Trimmed query text as the user produced it.
    text: String,
    /// Lowercased form, computed once.
    lowered: String,
    /// Tag selection or free text.
    mode: QueryMode,
}

impl NormalizedQuery {
    /// Derives the active query from raw input.
    ///
    /// A selected tag takes precedence over the free-text term; the caller
    /// owns clearing one control when the other is set, so this function
    /// just picks. Returns `None` when the effective query trims to empty,
    /// in which case the caller falls back to the tag-browsing view instead
    /// of running a search.
    pub fn normalize(search_term: &str, selected_tag: Option<&str>) -> Option<Self> {
        let (raw, mode) = match selected_tag {
            Some(tag) => (tag, QueryMode::Tag),
            None => (search_term, QueryMode::Text),
        };
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            lowered: text.to_lowercase(),
            mode,
        })
    }

    /// The trimmed query text, original casing.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The lowercased query text used for matching.
    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    /// The query mode.
    pub fn mode(&self) -> QueryMode {
        self.mode
    }

    /// The text to highlight in rendered results, if any.
    ///
    /// Only free-text queries highlight; tag selection never does.
    pub fn highlight_term(&self) -> Option<&str> {
        match self.mode {
            QueryMode::Text => Some(&self.text),
            QueryMode::Tag => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn trims_free_text() {
        let q = NormalizedQuery::normalize("  Birthday Gala  ", None).unwrap();
        assert_eq!(q.text(), "Birthday Gala");
        assert_eq!(q.lowered(), "birthday gala");
        assert_eq!(q.mode(), QueryMode::Text);
    }

    #[test]
    fn empty_text_yields_none() {
        assert!(NormalizedQuery::normalize("", None).is_none());
        assert!(NormalizedQuery::normalize("   ", None).is_none());
    }

    #[test]
    fn selected_tag_overrides_text() {
        let q = NormalizedQuery::normalize("typed words", Some("comedy")).unwrap();
        assert_eq!(q.text(), "comedy");
        assert_eq!(q.mode(), QueryMode::Tag);
    }

    #[test]
    fn blank_tag_yields_none() {
        // A tag that trims to empty produces no query even when free text
        // is present; the tag selection still wins.
        assert!(NormalizedQuery::normalize("typed words", Some("  ")).is_none());
    }

    #[test]
    fn tag_mode_never_highlights() {
        let q = NormalizedQuery::normalize("", Some("comedy")).unwrap();
        assert_eq!(q.highlight_term(), None);

        let q = NormalizedQuery::normalize("birthday", None).unwrap();
        assert_eq!(q.highlight_term(), Some("birthday"));
    }
}
