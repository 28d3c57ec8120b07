use std::{
    fs::{self, File},
    io::Write,
    path::PathBuf,
};

use anyhow::{bail, Context, Result};

use crate::core::persistence::storage_path::buckets_dir;
use crate::errors::AppError;

use super::object_store::ObjectStore;

/// Local filesystem object store: one directory per bucket under the data
/// root. Object names are validated so they can only address files directly
/// inside their bucket directory.
pub struct FsObjectStore {
    root: PathBuf,
}

impl FsObjectStore {
    pub fn new() -> Self {
        Self {
            root: buckets_dir(),
        }
    }

    pub fn at(root: PathBuf) -> Self {
        Self { root }
    }

    fn bucket_path(&self, bucket: &str) -> Result<PathBuf> {
        validate_segment(bucket, "bucket")?;
        Ok(self.root.join(bucket))
    }

    fn object_path(&self, bucket: &str, object_name: &str) -> Result<PathBuf> {
        validate_segment(object_name, "object name")?;
        Ok(self.bucket_path(bucket)?.join(object_name))
    }
}

impl Default for FsObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_segment(value: &str, what: &str) -> Result<()> {
    if value.is_empty() || value.contains('/') || value.contains('\\') || value.contains("..") {
        bail!("invalid {what}: {value:?}");
    }
    Ok(())
}

impl ObjectStore for FsObjectStore {
    fn ensure_bucket(&self, bucket: &str) -> Result<()> {
        let path = self.bucket_path(bucket)?;
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create bucket directory {path:?}"))?;
        Ok(())
    }

    fn put_object(&self, bucket: &str, object_name: &str, data: &[u8]) -> Result<()> {
        self.ensure_bucket(bucket)?;
        let path = self.object_path(bucket, object_name)?;

        let tmp_path = path.with_extension("tmp");
        let mut f = File::create(&tmp_path).context("Failed to create temp object file")?;
        f.write_all(data)?;
        f.flush()?;
        f.sync_all().context("Failed to sync temp object file")?;
        fs::rename(&tmp_path, &path).context("Failed to finalize object file")?;

        Ok(())
    }

    fn get_object(&self, bucket: &str, object_name: &str) -> Result<Vec<u8>> {
        let path = self.object_path(bucket, object_name)?;
        if !path.exists() {
            return Err(
                AppError::NotFound(format!("object {bucket}/{object_name} not found")).into(),
            );
        }

        fs::read(&path).with_context(|| format!("Failed to read object {bucket}/{object_name}"))
    }

    fn delete_object(&self, bucket: &str, object_name: &str) -> Result<()> {
        let path = self.object_path(bucket, object_name)?;
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to delete object {bucket}/{object_name}"))?;
        }
        Ok(())
    }

    fn provider(&self) -> &'static str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_deletes_objects() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FsObjectStore::at(tmp.path().to_path_buf());

        store.ensure_bucket("uploads").unwrap();
        store.put_object("uploads", "k1", b"hello").unwrap();
        assert_eq!(store.get_object("uploads", "k1").unwrap(), b"hello");

        store.delete_object("uploads", "k1").unwrap();
        assert!(store.get_object("uploads", "k1").is_err());
    }

    #[test]
    fn rejects_path_traversal() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FsObjectStore::at(tmp.path().to_path_buf());

        assert!(store.put_object("uploads", "../escape", b"x").is_err());
        assert!(store.put_object("../escape", "k1", b"x").is_err());
        assert!(store.get_object("uploads", "a/b").is_err());
    }

    #[test]
    fn missing_object_maps_to_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FsObjectStore::at(tmp.path().to_path_buf());
        store.ensure_bucket("uploads").unwrap();

        let err = store.get_object("uploads", "missing").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::NotFound(_))
        ));
    }
}
