use std::{
    fs::{self, File},
    io::Write,
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use tracing::warn;

use crate::core::persistence::record_fs_adapter_trait::RecordFsAdapterTrait;
use crate::core::persistence::storage_path::notes_dir;

use super::note_entity::NoteEntity;

/// FS adapter for notes, one `<id>.json` document per note.
pub struct NoteFsAdapter {
    dir: PathBuf,
}

impl NoteFsAdapter {
    pub fn new() -> Self {
        Self { dir: notes_dir() }
    }

    pub fn at(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains('/') || key.contains("..") {
            bail!("invalid note id: {key:?}");
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    fn write(&self, key: &str, data: &NoteEntity) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).context("Failed to create notes directory")?;

        let tmp_path = path.with_extension("json.tmp");
        let mut f = File::create(&tmp_path).context("Failed to create temp note file")?;
        let body = serde_json::to_vec_pretty(data).context("Failed to serialize note")?;
        f.write_all(&body)?;
        f.flush()?;
        f.sync_all().context("Failed to sync temp note file")?;
        fs::rename(&tmp_path, &path).context("Failed to finalize note file")?;

        #[cfg(unix)]
        {
            let dir_file = File::open(&self.dir).context("Failed to open notes directory")?;
            dir_file.sync_all().context("Failed to sync notes directory")?;
        }

        Ok(())
    }
}

impl Default for NoteFsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordFsAdapterTrait<NoteEntity> for NoteFsAdapter {
    fn read(&self, key: &str) -> Result<Option<NoteEntity>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }

        let body = fs::read(&path).context("Failed to read note")?;
        let note = serde_json::from_slice(&body).context("Failed to parse note")?;
        Ok(Some(note))
    }

    fn insert(&self, key: &str, data: &NoteEntity) -> Result<()> {
        self.write(key, data)
    }

    fn update(&self, key: &str, data: &NoteEntity) -> Result<()> {
        self.write(key, data)
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        if path.exists() {
            fs::remove_file(&path).context("Failed to delete note")?;
        }
        Ok(())
    }

    fn list(&self) -> Result<Vec<NoteEntity>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut notes = Vec::new();
        for entry in fs::read_dir(&self.dir).context("Failed to list notes directory")? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            match fs::read(&path)
                .context("Failed to read note")
                .and_then(|body| serde_json::from_slice(&body).context("Failed to parse note"))
            {
                Ok(note) => notes.push(note),
                Err(err) => warn!("skipping note {:?}: {err:#}", path),
            }
        }

        Ok(notes)
    }
}
