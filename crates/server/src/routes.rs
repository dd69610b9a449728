use std::sync::Arc;

use axum::{
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::records::RecordService;

use crate::openapi::ApiDoc;

pub mod records;

#[derive(Clone)]
pub struct ServerState {
    pub records: Arc<RecordService>,
}

#[utoipa::path(get, path = "/health", tag = "system", responses((status = 200, description = "Service is up")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: record API, health, OpenAPI document and static frontend.
pub fn build_router(state: ServerState, cors: CorsLayer, frontend_dir: &str) -> Router {
    let index = format!("{}/index.html", frontend_dir.trim_end_matches('/'));
    let static_dir = ServeDir::new(frontend_dir).fallback(ServeFile::new(index));

    let api = Router::new()
        .route("/api/records", get(records::list_records).post(records::create_record))
        .route(
            "/api/records/:id",
            get(records::get_record)
                .put(records::update_record)
                .delete(records::delete_record),
        )
        .route("/api/stats", get(records::stats))
        .route("/api/attendance/:phone", get(records::attendance))
        .route("/api/customers", get(records::customers))
        .route("/api/export/csv", get(records::export_csv))
        .route("/api/message/:id", get(records::message));

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(api)
        .fallback_service(static_dir)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
