pub mod files;
pub mod logs;
pub mod notes;
pub mod record_fs_adapter_trait;
pub mod storage_path;
