use crate::core::persistence::record_fs_adapter_trait::RecordFsAdapterTrait;

use super::file_record_entity::FileRecordEntity;

/// API-facing repository abstraction for file records.
pub trait FileRecordApiRepository {
    fn fs_adapter(&self) -> &dyn RecordFsAdapterTrait<FileRecordEntity>;

    fn read(&self, key: &str) -> anyhow::Result<Option<FileRecordEntity>> {
        self.fs_adapter().read(key)
    }

    fn insert(&self, record: &FileRecordEntity) -> anyhow::Result<()> {
        self.fs_adapter().insert(&record.file_key, record)
    }

    fn update(&self, record: &FileRecordEntity) -> anyhow::Result<()> {
        self.fs_adapter().update(&record.file_key, record)
    }

    fn delete(&self, key: &str) -> anyhow::Result<()> {
        self.fs_adapter().delete(key)
    }

    fn list(&self) -> anyhow::Result<Vec<FileRecordEntity>> {
        self.fs_adapter().list()
    }
}
