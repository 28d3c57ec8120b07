use crate::core::persistence::record_fs_adapter_trait::RecordFsAdapterTrait;

use super::note_api_repository_trait::NoteApiRepository;
use super::note_entity::NoteEntity;
use super::note_fs_adapter::NoteFsAdapter;

pub struct NoteRepository {
    adapter: NoteFsAdapter,
}

impl NoteRepository {
    pub fn new() -> Self {
        Self {
            adapter: NoteFsAdapter::new(),
        }
    }
}

impl Default for NoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteApiRepository for NoteRepository {
    fn fs_adapter(&self) -> &dyn RecordFsAdapterTrait<NoteEntity> {
        &self.adapter
    }
}
