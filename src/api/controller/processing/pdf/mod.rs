use axum::Json;
use serde_json::Value;

use crate::domain::processing::service as processing_service;

pub struct PdfController;

impl PdfController {
    /// PDF processing service info.
    pub async fn info() -> Json<Value> {
        Json(processing_service::pdf_info_payload())
    }
}
