use crate::core::persistence::record_fs_adapter_trait::RecordFsAdapterTrait;

use super::file_record_api_repository_trait::FileRecordApiRepository;
use super::file_record_entity::FileRecordEntity;
use super::file_record_fs_adapter::FileRecordFsAdapter;

pub struct FileRecordRepository {
    adapter: FileRecordFsAdapter,
}

impl FileRecordRepository {
    pub fn new() -> Self {
        Self {
            adapter: FileRecordFsAdapter::new(),
        }
    }
}

impl Default for FileRecordRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl FileRecordApiRepository for FileRecordRepository {
    fn fs_adapter(&self) -> &dyn RecordFsAdapterTrait<FileRecordEntity> {
        &self.adapter
    }
}
