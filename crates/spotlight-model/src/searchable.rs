//! Uniform read access to entity text fields.

use chrono::{DateTime, Utc};

use crate::{Idea, Show, Task};

/// Capability trait exposing the matchable shape shared by all entities.
///
/// The engine only ever reads titles, optional prose fields, tags, and the
/// resolved timestamp; each entity type maps its own fields onto these
/// accessors. Fields an entity does not carry return `None` and are simply
/// excluded from matching.
pub trait Searchable {
    /// Display title. Every entity has one.
    fn title(&self) -> &str;

    /// Optional description text.
    fn description(&self) -> Option<&str> {
        None
    }

    /// Optional notes text.
    fn notes(&self) -> Option<&str> {
        None
    }

    /// Optional body content.
    fn content(&self) -> Option<&str> {
        None
    }

    /// Tags in their original casing.
    fn tags(&self) -> &[String];

    /// Resolved modification timestamp, if any was recorded.
    fn timestamp(&self) -> Option<DateTime<Utc>>;

    /// All present text fields plus tags, lowercased and joined by single
    /// spaces. This is the haystack free-text matching runs against.
    fn searchable_text(&self) -> String {
        let mut parts: Vec<&str> = vec![self.title()];
        if let Some(d) = self.description() {
            parts.push(d);
        }
        if let Some(n) = self.notes() {
            parts.push(n);
        }
        if let Some(c) = self.content() {
            parts.push(c);
        }
        for tag in self.tags() {
            parts.push(tag);
        }
        parts.join(" ").to_lowercase()
    }
}

impl Searchable for Show {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamps.resolved()
    }
}

impl Searchable for Task {
    fn title(&self) -> &str {
        &self.title
    }

    fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamps.resolved()
    }
}

impl Searchable for Idea {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamps.resolved()
    }
}

#[cfg(test)]
mod test {
    use crate::Timestamps;

    use super::*;

    #[test]
    fn searchable_text_joins_present_fields() {
        let idea = Idea {
            id: "i1".to_string(),
            title: "Crowd Work".to_string(),
            description: Some("Audience interaction".to_string()),
            content: None,
            tags: vec!["Comedy".to_string()],
            timestamps: Timestamps::default(),
        };
        assert_eq!(idea.searchable_text(), "crowd work audience interaction comedy");
    }

    #[test]
    fn searchable_text_skips_absent_fields() {
        let task = Task {
            id: "t1".to_string(),
            title: "Reset tables".to_string(),
            notes: None,
            tags: vec![],
            timestamps: Timestamps::default(),
        };
        assert_eq!(task.searchable_text(), "reset tables");
    }
}
