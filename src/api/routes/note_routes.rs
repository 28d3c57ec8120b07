//! Note routes (e.g., /api/v1/notes/*)

use axum::{routing::get, Router};

use crate::api::controller::notes::NoteController;
use crate::app_state::AppState;

pub fn note_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(NoteController::list_notes).post(NoteController::create_note),
        )
        .route(
            "/{id}",
            get(NoteController::get_note)
                .put(NoteController::update_note)
                .delete(NoteController::delete_note),
        )
}
