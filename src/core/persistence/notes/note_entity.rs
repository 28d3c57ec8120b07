use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::note::dto::note_upsert_request::NoteUpdateRequest;

/// A stored note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteEntity {
    /// Note id (v4 UUID).
    pub id: String,
    pub title: String,
    pub content: String,
    pub tags: Option<Vec<String>>,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub metadata: Option<Value>,
}

impl NoteEntity {
    pub fn new(
        id: String,
        title: String,
        content: String,
        tags: Option<Vec<String>>,
        created_by: Option<String>,
        metadata: Option<Value>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            content,
            tags: normalize_tags(tags),
            created_by,
            created_at: now,
            updated_at: now,
            metadata,
        }
    }

    pub fn apply_update(&mut self, req: NoteUpdateRequest) {
        if let Some(v) = req.title {
            self.title = v.trim().to_string();
        }

        if let Some(v) = req.content {
            self.content = v;
        }

        if let Some(v) = req.tags {
            self.tags = normalize_tags(Some(v));
        }

        if let Some(v) = req.metadata {
            self.metadata = Some(v);
        }

        self.updated_at = Utc::now();
    }
}

fn normalize_tags(tags: Option<Vec<String>>) -> Option<Vec<String>> {
    let cleaned: Vec<String> = tags
        .unwrap_or_default()
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}
