use crate::core::persistence::record_fs_adapter_trait::RecordFsAdapterTrait;

use super::note_entity::NoteEntity;

/// API-facing repository abstraction for notes.
pub trait NoteApiRepository {
    fn fs_adapter(&self) -> &dyn RecordFsAdapterTrait<NoteEntity>;

    fn read(&self, id: &str) -> anyhow::Result<Option<NoteEntity>> {
        self.fs_adapter().read(id)
    }

    fn insert(&self, note: &NoteEntity) -> anyhow::Result<()> {
        self.fs_adapter().insert(&note.id, note)
    }

    fn update(&self, note: &NoteEntity) -> anyhow::Result<()> {
        self.fs_adapter().update(&note.id, note)
    }

    fn delete(&self, id: &str) -> anyhow::Result<()> {
        self.fs_adapter().delete(id)
    }

    fn list(&self) -> anyhow::Result<Vec<NoteEntity>> {
        self.fs_adapter().list()
    }
}
