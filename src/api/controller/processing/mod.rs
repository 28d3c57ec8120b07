//! Controllers for the processing services host. Every handler returns a
//! fixed payload; see the processing domain service.

pub mod ml;
pub mod pdf;

use axum::Json;
use serde_json::Value;

use crate::domain::processing::service as processing_service;

pub struct ProcessingController;

impl ProcessingController {
    pub async fn index() -> Json<Value> {
        Json(processing_service::index_payload())
    }

    pub async fn health() -> Json<Value> {
        Json(processing_service::health_payload())
    }
}
