//! File API DTOs

use serde::{Deserialize, Serialize};

/// Signature parameters on `/files/{file_key}/content`.
#[derive(Deserialize, Debug)]
pub struct DownloadQuery {
    pub expires: i64,
    pub sig: String,
}

#[derive(Debug, Serialize)]
pub struct DownloadUrlResponse {
    pub download_url: String,
    pub expires_in: u64,
}
