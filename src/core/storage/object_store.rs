use anyhow::Result;
use tracing::warn;

use crate::config;

use super::fs_object_store::FsObjectStore;

/// Unified API for file storage backends.
pub trait ObjectStore: Send + Sync {
    /// Create the bucket if it does not exist yet.
    fn ensure_bucket(&self, bucket: &str) -> Result<()>;

    fn put_object(&self, bucket: &str, object_name: &str, data: &[u8]) -> Result<()>;

    fn get_object(&self, bucket: &str, object_name: &str) -> Result<Vec<u8>>;

    fn delete_object(&self, bucket: &str, object_name: &str) -> Result<()>;

    /// Backend identifier recorded on file records (e.g. `local`).
    fn provider(&self) -> &'static str;
}

/// Pick the storage backend from the environment.
pub fn create_object_store() -> Box<dyn ObjectStore> {
    let storage_type = config::storage_type();
    match storage_type.as_str() {
        "local" => Box::new(FsObjectStore::new()),
        other => {
            warn!("unknown storage type {other:?}, using local filesystem store");
            Box::new(FsObjectStore::new())
        }
    }
}
