//! File controller: upload, listing, download links and raw content

use axum::extract::{Multipart, Path, Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;

use crate::api::dto::file_dto::{DownloadQuery, DownloadUrlResponse};
use crate::api::dto::paginated_response::PaginatedResponse;
use crate::api::dto::{ApiResponse, PaginationQuery};
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::persistence::files::file_record_entity::FileRecordEntity;
use crate::errors::{from_anyhow, AppError};

pub struct FileController;

impl FileController {
    /// `POST /api/v1/upload`: multipart, payload under the `file` field.
    pub async fn upload(
        State(state): State<AppState>,
        mut multipart: Multipart,
    ) -> Result<Json<ApiResponse<FileRecordEntity>>, AppError> {
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BodyParsingError(e.to_string()))?
        {
            if field.name() != Some("file") {
                continue;
            }

            let original_filename = field
                .file_name()
                .unwrap_or("upload.bin")
                .to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BodyParsingError(e.to_string()))?
                .to_vec();

            return to_json(
                state
                    .file_service
                    .upload_file(original_filename, content_type, data)
                    .await,
            );
        }

        Err(AppError::BodyParsingError(
            "missing multipart field `file`".into(),
        ))
    }

    pub async fn list_files(
        State(state): State<AppState>,
        Query(query): Query<PaginationQuery>,
    ) -> Result<Json<ApiResponse<PaginatedResponse<FileRecordEntity>>>, AppError> {
        to_json(state.file_service.list_files(query).await)
    }

    pub async fn get_file(
        State(state): State<AppState>,
        Path(file_key): Path<String>,
    ) -> Result<Json<ApiResponse<FileRecordEntity>>, AppError> {
        to_json(state.file_service.get_file(file_key).await)
    }

    pub async fn get_download_url(
        State(state): State<AppState>,
        Path(file_key): Path<String>,
    ) -> Result<Json<ApiResponse<DownloadUrlResponse>>, AppError> {
        to_json(state.file_service.get_download_url(file_key).await)
    }

    /// Raw object bytes; not wrapped in the JSON envelope.
    pub async fn get_file_content(
        State(state): State<AppState>,
        Path(file_key): Path<String>,
        Query(query): Query<DownloadQuery>,
    ) -> Result<impl IntoResponse, AppError> {
        let (record, data) = state
            .file_service
            .get_file_content(file_key, query)
            .await
            .map_err(from_anyhow)?;

        Ok(([(header::CONTENT_TYPE, record.content_type)], data))
    }

    pub async fn delete_file(
        State(state): State<AppState>,
        Path(file_key): Path<String>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.file_service.delete_file(file_key).await)
    }
}
