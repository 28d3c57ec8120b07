use std::time::Duration;

use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::{Request, Response, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use http::{HeaderValue, Method};
use serde_json::{json, Value};
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultOnRequest, TraceLayer};
use tracing::info;

use crate::api::controller::files::FileController;
use crate::api::controller::processing::ml::MlController;
use crate::api::controller::processing::pdf::PdfController;
use crate::api::controller::processing::ProcessingController;
use crate::app_state::AppState;
use crate::config;

const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Build the API gateway router
pub fn app_router(state: AppState) -> Router {
    // System, file and note subrouters live under /api/v1
    let api_v1 = Router::new()
        .route("/", get(api_v1_root))
        .route(
            "/upload",
            post(FileController::upload).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .nest("/system", crate::api::routes::system_routes::system_routes())
        .nest("/files", crate::api::routes::file_routes::file_routes())
        .nest("/notes", crate::api::routes::note_routes::note_routes());

    Router::new()
        // Root route
        .route("/", get(root))
        // Health check
        .route("/health", get(health_check))
        // API v1
        .nest("/api/v1", api_v1)
        // Fallback handler for 404
        .fallback(handler_404)
        .layer(trace_layer())
        .layer(cors_layer(&config::api_cors_origins()))
        .with_state(state)
}

/// Build the processing services host router
pub fn services_router() -> Router {
    Router::new()
        .route("/", get(ProcessingController::index))
        .route("/health", get(ProcessingController::health))
        .route("/ml", get(MlController::info))
        .route("/pdf", get(PdfController::info))
        .fallback(handler_404)
        .layer(trace_layer())
        .layer(cors_layer(&config::services_cors_origins()))
}

// Handler for root
async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to Scimus API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// Handler for health check
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

// Placeholder for versioned API root
async fn api_v1_root() -> Json<Value> {
    Json(json!({ "message": "API v1" }))
}

// Handler for 404 Not Found
async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

type MakeSpanFn = fn(&Request<Body>) -> tracing::Span;
type OnResponseFn = fn(&Response<Body>, Duration, &tracing::Span);

fn trace_layer(
) -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, MakeSpanFn, DefaultOnRequest, OnResponseFn>
{
    TraceLayer::new_for_http()
        .make_span_with(make_span as MakeSpanFn)
        .on_response(on_response as OnResponseFn)
}

fn make_span(req: &Request<Body>) -> tracing::Span {
    tracing::info_span!(
        "request",
        method = %req.method(),
        uri = %req.uri(),
    )
}

fn on_response(res: &Response<Body>, latency: Duration, _span: &tracing::Span) {
    info!(
        latency = %format!("{} ms", latency.as_millis()),
        status = %res.status().as_u16(),
        "finished processing request"
    );
}
