use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata record for a stored file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecordEntity {
    /// Object key inside the bucket (v4 UUID assigned at upload).
    pub file_key: String,
    /// Filename the client uploaded under; never used as a path.
    pub original_filename: String,
    /// Payload size in bytes.
    pub file_size: u64,
    /// MIME type reported by the client.
    pub content_type: String,
    /// Coarse classification derived from the content type.
    pub file_type: FileType,
    /// Bucket the object was stored in.
    pub bucket: String,
    /// Backend that holds the object (e.g. `local`).
    pub storage_provider: String,
    /// Hex SHA-256 of the payload.
    pub etag: Option<String>,
    /// Optional uploader identity.
    pub uploaded_by: Option<String>,
    /// Post-upload processing state.
    pub processing_status: ProcessingStatus,
    /// Upload timestamp (UTC).
    pub uploaded_at: DateTime<Utc>,
    /// Last update timestamp (UTC).
    pub updated_at: DateTime<Utc>,
    /// Free-form extra metadata.
    pub metadata: Option<Value>,
}

impl FileRecordEntity {
    pub fn new(
        file_key: String,
        original_filename: String,
        content_type: String,
        file_size: u64,
        bucket: String,
        storage_provider: String,
        etag: Option<String>,
    ) -> Self {
        let now = Utc::now();
        let file_type = FileType::from_content_type(&content_type);
        Self {
            file_key,
            original_filename,
            file_size,
            content_type,
            file_type,
            bucket,
            storage_provider,
            etag,
            uploaded_by: None,
            processing_status: ProcessingStatus::Pending,
            uploaded_at: now,
            updated_at: now,
            metadata: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Pdf,
    Image,
    Document,
    Other,
}

impl FileType {
    pub fn from_content_type(content_type: &str) -> Self {
        let ct = content_type
            .split(';')
            .next()
            .unwrap_or(content_type)
            .trim()
            .to_ascii_lowercase();

        if ct == "application/pdf" {
            FileType::Pdf
        } else if ct.starts_with("image/") {
            FileType::Image
        } else if ct.starts_with("text/")
            || ct == "application/msword"
            || ct.starts_with("application/vnd.openxmlformats-officedocument")
            || ct.starts_with("application/vnd.oasis.opendocument")
        {
            FileType::Document
        } else {
            FileType::Other
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}
