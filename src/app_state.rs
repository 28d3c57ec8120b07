use std::sync::Arc;

use crate::core::persistence::logs::log_repository::LogRepositoryImpl;
use crate::domain::system::service::log_service::LogService;

macro_rules! delegate_async_service {
    ($(fn $name:ident($($arg:ident : $typ:ty),*) -> $ret:ty => $path:path;)+) => {
        $(
            pub async fn $name(&self, $($arg: $typ),*) -> anyhow::Result<$ret> {
                $path($($arg),*).await
            }
        )+
    };
}

#[derive(Clone)]
pub struct AppState {
    pub log_service: Arc<LogService<LogRepositoryImpl>>,
    pub system_service: Arc<SystemService>,
    pub file_service: Arc<FileService>,
    pub note_service: Arc<NoteService>,
}

pub fn build_app_state() -> AppState {
    AppState {
        log_service: Arc::new(LogService::new(LogRepositoryImpl::new())),
        system_service: Arc::new(SystemService::default()),
        file_service: Arc::new(FileService::default()),
        note_service: Arc::new(NoteService::default()),
    }
}

#[derive(Clone, Default)]
pub struct SystemService;

impl SystemService {
    delegate_async_service! {
        fn status() -> serde_json::Value => crate::domain::system::service::status_service::status;
        fn health() -> serde_json::Value => crate::domain::system::service::health_service::health;
    }
}

#[derive(Clone, Default)]
pub struct FileService;

impl FileService {
    delegate_async_service! {
        fn upload_file(original_filename: String, content_type: String, data: Vec<u8>) -> crate::core::persistence::files::file_record_entity::FileRecordEntity => crate::domain::file::service::file_service::upload_file;
        fn list_files(q: crate::api::dto::PaginationQuery) -> crate::api::dto::paginated_response::PaginatedResponse<crate::core::persistence::files::file_record_entity::FileRecordEntity> => crate::domain::file::service::file_service::list_files;
        fn get_file(file_key: String) -> crate::core::persistence::files::file_record_entity::FileRecordEntity => crate::domain::file::service::file_service::get_file;
        fn get_download_url(file_key: String) -> crate::api::dto::file_dto::DownloadUrlResponse => crate::domain::file::service::file_service::get_download_url;
        fn get_file_content(file_key: String, q: crate::api::dto::file_dto::DownloadQuery) -> (crate::core::persistence::files::file_record_entity::FileRecordEntity, Vec<u8>) => crate::domain::file::service::file_service::get_file_content;
        fn delete_file(file_key: String) -> serde_json::Value => crate::domain::file::service::file_service::delete_file;
    }
}

#[derive(Clone, Default)]
pub struct NoteService;

impl NoteService {
    delegate_async_service! {
        fn create_note(req: crate::domain::note::dto::note_upsert_request::NoteCreateRequest) -> crate::core::persistence::notes::note_entity::NoteEntity => crate::domain::note::service::note_service::create_note;
        fn list_notes(q: crate::api::dto::PaginationQuery) -> crate::api::dto::paginated_response::PaginatedResponse<crate::core::persistence::notes::note_entity::NoteEntity> => crate::domain::note::service::note_service::list_notes;
        fn get_note(id: String) -> crate::core::persistence::notes::note_entity::NoteEntity => crate::domain::note::service::note_service::get_note;
        fn update_note(id: String, req: crate::domain::note::dto::note_upsert_request::NoteUpdateRequest) -> crate::core::persistence::notes::note_entity::NoteEntity => crate::domain::note::service::note_service::update_note;
        fn delete_note(id: String) -> serde_json::Value => crate::domain::note::service::note_service::delete_note;
    }
}
