//! The full in-memory corpus and its loading/browsing helpers.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CorpusError, Idea, Show};

/// The full collection of shows (with nested tasks) and ideas supplied by
/// the storage layer.
///
/// Tasks have no top-level collection: they exist only nested under their
/// owning show.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    /// All shows, each carrying its nested tasks.
    #[serde(default)]
    pub shows: Vec<Show>,
    /// All standalone ideas.
    #[serde(default)]
    pub ideas: Vec<Idea>,
}

impl Corpus {
    /// Loads a corpus snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let raw = fs::read_to_string(path).map_err(|source| CorpusError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| CorpusError::ParseJson {
            path: path.to_path_buf(),
            source,
        })
    }

    /// All distinct tags across shows, tasks, and ideas.
    ///
    /// Original casing is preserved, duplicates are removed case-sensitively,
    /// and the result is sorted alphabetically. This is the browsing view a
    /// caller renders when the search query is empty.
    pub fn distinct_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .shows
            .iter()
            .flat_map(|s| s.tags.iter().chain(s.tasks.iter().flat_map(|t| t.tags.iter())))
            .chain(self.ideas.iter().flat_map(|i| i.tags.iter()))
            .cloned()
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }
}
