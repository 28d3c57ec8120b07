pub mod file_record_api_repository_trait;
pub mod file_record_entity;
pub mod file_record_fs_adapter;
pub mod file_record_repository;
