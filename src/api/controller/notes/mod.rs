//! Note controller

use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::Value;

use crate::api::dto::paginated_response::PaginatedResponse;
use crate::api::dto::{ApiResponse, PaginationQuery};
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::persistence::notes::note_entity::NoteEntity;
use crate::domain::note::dto::note_upsert_request::{NoteCreateRequest, NoteUpdateRequest};
use crate::errors::AppError;

pub struct NoteController;

impl NoteController {
    pub async fn create_note(
        State(state): State<AppState>,
        Json(payload): Json<NoteCreateRequest>,
    ) -> Result<Json<ApiResponse<NoteEntity>>, AppError> {
        to_json(state.note_service.create_note(payload).await)
    }

    pub async fn list_notes(
        State(state): State<AppState>,
        Query(query): Query<PaginationQuery>,
    ) -> Result<Json<ApiResponse<PaginatedResponse<NoteEntity>>>, AppError> {
        to_json(state.note_service.list_notes(query).await)
    }

    pub async fn get_note(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<ApiResponse<NoteEntity>>, AppError> {
        to_json(state.note_service.get_note(id).await)
    }

    pub async fn update_note(
        State(state): State<AppState>,
        Path(id): Path<String>,
        Json(payload): Json<NoteUpdateRequest>,
    ) -> Result<Json<ApiResponse<NoteEntity>>, AppError> {
        to_json(state.note_service.update_note(id, payload).await)
    }

    pub async fn delete_note(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.note_service.delete_note(id).await)
    }
}
