//! File routes (e.g., /api/v1/files/*)

use axum::{routing::get, Router};

use crate::api::controller::files::FileController;
use crate::app_state::AppState;

pub fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(FileController::list_files))
        .route(
            "/{file_key}",
            get(FileController::get_file).delete(FileController::delete_file),
        )
        .route("/{file_key}/download", get(FileController::get_download_url))
        .route("/{file_key}/content", get(FileController::get_file_content))
}
