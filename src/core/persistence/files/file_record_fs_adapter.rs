use std::{
    fs::{self, File},
    io::Write,
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use tracing::warn;

use crate::core::persistence::record_fs_adapter_trait::RecordFsAdapterTrait;
use crate::core::persistence::storage_path::files_meta_dir;

use super::file_record_entity::FileRecordEntity;

/// FS adapter for file metadata records.
///
/// One `<file_key>.json` document per record, written atomically.
pub struct FileRecordFsAdapter {
    dir: PathBuf,
}

impl FileRecordFsAdapter {
    pub fn new() -> Self {
        Self {
            dir: files_meta_dir(),
        }
    }

    /// Adapter rooted at an explicit directory (tests).
    pub fn at(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains('/') || key.contains("..") {
            bail!("invalid file record key: {key:?}");
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    fn write(&self, key: &str, data: &FileRecordEntity) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).context("Failed to create file records directory")?;

        let tmp_path = path.with_extension("json.tmp");
        let mut f = File::create(&tmp_path).context("Failed to create temp file record")?;
        let body = serde_json::to_vec_pretty(data).context("Failed to serialize file record")?;
        f.write_all(&body)?;
        f.flush()?;
        f.sync_all().context("Failed to sync temp file record")?;
        fs::rename(&tmp_path, &path).context("Failed to finalize file record")?;

        #[cfg(unix)]
        {
            let dir_file = File::open(&self.dir).context("Failed to open file records directory")?;
            dir_file
                .sync_all()
                .context("Failed to sync file records directory")?;
        }

        Ok(())
    }
}

impl Default for FileRecordFsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordFsAdapterTrait<FileRecordEntity> for FileRecordFsAdapter {
    fn read(&self, key: &str) -> Result<Option<FileRecordEntity>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }

        let body = fs::read(&path).context("Failed to read file record")?;
        let record = serde_json::from_slice(&body).context("Failed to parse file record")?;
        Ok(Some(record))
    }

    fn insert(&self, key: &str, data: &FileRecordEntity) -> Result<()> {
        self.write(key, data)
    }

    fn update(&self, key: &str, data: &FileRecordEntity) -> Result<()> {
        self.write(key, data)
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        if path.exists() {
            fs::remove_file(&path).context("Failed to delete file record")?;
        }
        Ok(())
    }

    fn list(&self) -> Result<Vec<FileRecordEntity>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for entry in fs::read_dir(&self.dir).context("Failed to list file records directory")? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            match fs::read(&path)
                .context("Failed to read file record")
                .and_then(|body| {
                    serde_json::from_slice(&body).context("Failed to parse file record")
                }) {
                Ok(record) => records.push(record),
                // Skip unreadable documents so one bad file does not take the listing down.
                Err(err) => warn!("skipping file record {:?}: {err:#}", path),
            }
        }

        Ok(records)
    }
}
