pub mod note_api_repository_trait;
pub mod note_entity;
pub mod note_fs_adapter;
pub mod note_repository;
