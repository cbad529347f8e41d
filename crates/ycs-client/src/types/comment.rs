//! Incident comment records.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::serde_helpers::{date, null_as_default};

/// Progress update posted on an incident.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub incident_id: u64,
    /// Comment text, in the API's HTML subset.
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    /// Comment type, see `COMMENT_*`.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "date")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "date")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Comment {
    /// Content rendered to lightweight markup.
    #[must_use]
    pub fn markdown(&self) -> String {
        if self.content.is_empty() {
            return String::new();
        }
        ycs_markup::render(&self.content)
    }
}

record_list!(
    /// List of comments, oldest first as returned by the API.
    Comments,
    Comment
);

impl Comments {
    /// Comment at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Comment> {
        self.0.get(index)
    }
}
