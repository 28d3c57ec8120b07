use axum::Json;
use serde_json::Value;

use crate::domain::processing::service as processing_service;

pub struct MlController;

impl MlController {
    /// Machine learning service info.
    pub async fn info() -> Json<Value> {
        Json(processing_service::ml_info_payload())
    }
}
