use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Create payload for notes.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NoteCreateRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1))]
    pub content: String,

    pub tags: Option<Vec<String>>,

    pub created_by: Option<String>,

    pub metadata: Option<Value>,
}

/// Partial update payload for notes.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NoteUpdateRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(min = 1))]
    pub content: Option<String>,

    pub tags: Option<Vec<String>>,

    pub metadata: Option<Value>,
}
