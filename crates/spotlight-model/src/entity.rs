//! The three corpus entity shapes and their shared timestamp block.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Optional modification timestamps carried by every entity.
///
/// Source data is inconsistent about both which timestamp it records and how
/// the field is spelled, so each slot accepts snake and camel case. Absence
/// of all three means the entity has no recency signal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timestamps {
    /// When the entity was last updated.
    #[serde(default, alias = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// When the entity was last modified (alternate spelling used by some exporters).
    #[serde(default, alias = "lastModified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    /// When the entity was created.
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Timestamps {
    /// Resolves the effective timestamp: updated, then last-modified, then
    /// created. Returns `None` when no timestamp was recorded.
    pub fn resolved(&self) -> Option<DateTime<Utc>> {
        self.updated_at.or(self.last_modified).or(self.created_at)
    }
}

/// A show: the top-level project unit, owning a list of tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Show {
    /// Stable identifier assigned by the storage layer.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tags attached to the show, original casing preserved.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Tasks nested under this show.
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Modification timestamps, if recorded.
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// A task nested under a show.
///
/// Task ids are only unique within their owning show, so anything that needs
/// a global key must combine both ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Identifier, unique within the owning show only.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Optional freeform notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Tags attached to the task.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Modification timestamps, if recorded.
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// A standalone idea, independent of any show.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Idea {
    /// Stable identifier assigned by the storage layer.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Optional short description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional body content (generated or hand-written).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Tags attached to the idea.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Modification timestamps, if recorded.
    #[serde(flatten)]
    pub timestamps: Timestamps,
}
