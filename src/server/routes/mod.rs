//! API routes for the status server

pub mod documents;
pub mod index;

use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use axum::extract::State;

use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Document status
        .route("/documents", get(documents::list_documents))
        .route("/documents", post(documents::register_document))
        .route("/documents/stats", get(documents::document_stats))
        .route("/documents/:id/status", get(documents::get_document_status))
        .route("/documents/:id/status", put(documents::update_document_status))
        .route("/documents/:id/reprocess", post(documents::reprocess_document))
        .route("/documents/:id", delete(documents::delete_document))
        // Index build status
        .route("/chatbots/:id/index-status", get(index::get_index_status))
        .route("/chatbots/:id/index-status", put(index::update_index_status))
        // Info
        .route("/info", get(info))
}

/// API info endpoint
///
/// Advertises the polling cadence so clients do not hardcode it.
async fn info(State(state): State<AppState>) -> Json<serde_json::Value> {
    let tracker = &state.config().tracker;
    Json(serde_json::json!({
        "name": "docpulse",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Ingestion status tracking with stall detection",
        "polling_interval_ms": tracker.polling_interval_ms,
        "stall_threshold_ms": tracker.stall_threshold_ms,
        "endpoints": {
            "GET /api/documents": "List documents with derived status",
            "GET /api/documents/stats": "Counts by status",
            "GET /api/documents/:id/status": "Poll one document's status",
            "POST /api/documents/:id/reprocess": "Reset an eligible document for reprocessing",
            "GET /api/chatbots/:id/index-status": "Poll a chatbot's index build status"
        }
    }))
}
