//! Document status endpoints
//!
//! The console polls `GET /documents/:id/status` every few seconds while a
//! document moves through the pipeline, and offers the reprocess action only
//! when the derived eligibility says so. The `PUT` status endpoint is the
//! ingestion job's write path: every call refreshes the heartbeat.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::status::{can_reprocess, status_label};
use crate::types::{
    DocumentListResponse, DocumentRecord, DocumentStatsResponse, DocumentStatus,
    DocumentStatusResponse, DocumentSummary,
};

/// Request to register a freshly uploaded document
#[derive(Debug, Deserialize)]
pub struct RegisterDocumentRequest {
    /// Original filename
    pub filename: String,
}

/// Request from the ingestion job to advance a document's status
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    /// New status value
    pub status: DocumentStatus,
}

fn derive_status(state: &AppState, record: &DocumentRecord) -> DocumentStatusResponse {
    let now = state.clock().now();
    let stalled = state
        .policy()
        .is_stalled(&record.status, record.updated_at.as_deref(), now);
    let reprocessable = can_reprocess(
        state.policy(),
        &record.status,
        record.updated_at.as_deref(),
        now,
    );

    DocumentStatusResponse {
        document_id: record.id,
        status: record.status.clone(),
        is_stalled: stalled,
        can_reprocess: reprocessable,
        label: status_label(&record.status, stalled).to_string(),
        updated_at: record.updated_at.clone(),
    }
}

/// GET /api/documents - List all documents with derived status fields
pub async fn list_documents(State(state): State<AppState>) -> Json<DocumentListResponse> {
    let documents: Vec<DocumentSummary> = state
        .store()
        .list_documents()
        .iter()
        .map(|record| {
            let derived = derive_status(&state, record);
            DocumentSummary::from_record(
                record,
                derived.is_stalled,
                derived.can_reprocess,
                derived.label,
            )
        })
        .collect();

    let total_count = documents.len();

    Json(DocumentListResponse {
        documents,
        total_count,
    })
}

/// POST /api/documents - Register an uploaded document
pub async fn register_document(
    State(state): State<AppState>,
    Json(request): Json<RegisterDocumentRequest>,
) -> Result<Json<DocumentStatusResponse>> {
    let record = DocumentRecord::new(request.filename, state.clock().now());
    let response = derive_status(&state, &record);

    tracing::info!("Registered document '{}' as {}", record.filename, record.id);
    state.store().insert_document(record);

    Ok(Json(response))
}

/// GET /api/documents/:id/status - Poll one document's derived status
pub async fn get_document_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentStatusResponse>> {
    let record = state
        .store()
        .document(&id)
        .ok_or_else(|| Error::DocumentNotFound(id.to_string()))?;

    Ok(Json(derive_status(&state, &record)))
}

/// PUT /api/documents/:id/status - Ingestion job callback advancing the status
pub async fn update_document_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<DocumentStatusResponse>> {
    let record = state
        .store()
        .set_document_status(&id, request.status, state.clock().now())
        .ok_or_else(|| Error::DocumentNotFound(id.to_string()))?;

    Ok(Json(derive_status(&state, &record)))
}

/// POST /api/documents/:id/reprocess - Reset an eligible document
///
/// Refused with 409 unless the document is in a resettable terminal state or
/// its processing heartbeat has provably gone quiet.
pub async fn reprocess_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentStatusResponse>> {
    let record = state
        .store()
        .document(&id)
        .ok_or_else(|| Error::DocumentNotFound(id.to_string()))?;

    let now = state.clock().now();
    if !can_reprocess(state.policy(), &record.status, record.updated_at.as_deref(), now) {
        return Err(Error::ReprocessNotAllowed(id.to_string()));
    }

    let record = state
        .store()
        .set_document_status(&id, DocumentStatus::Uploaded, now)
        .ok_or_else(|| Error::DocumentNotFound(id.to_string()))?;

    tracing::info!("Document {} queued for reprocessing", id);

    Ok(Json(derive_status(&state, &record)))
}

/// DELETE /api/documents/:id - Remove a document from tracking
pub async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    let record = state
        .store()
        .remove_document(&id)
        .ok_or_else(|| Error::DocumentNotFound(id.to_string()))?;

    tracing::info!("Deleted document '{}' ({})", record.filename, id);

    Ok(Json(serde_json::json!({
        "success": true,
        "document_id": id,
        "filename": record.filename,
    })))
}

/// GET /api/documents/stats - Counts by status across all tracked documents
pub async fn document_stats(State(state): State<AppState>) -> Json<DocumentStatsResponse> {
    let now = state.clock().now();
    let records = state.store().list_documents();

    let mut stats = DocumentStatsResponse {
        total: records.len(),
        uploaded: 0,
        processing: 0,
        chunked: 0,
        reviewing: 0,
        approved: 0,
        failed: 0,
        stalled: 0,
        unrecognized: 0,
    };

    for record in &records {
        match &record.status {
            DocumentStatus::Uploaded => stats.uploaded += 1,
            DocumentStatus::Processing => stats.processing += 1,
            DocumentStatus::Chunked => stats.chunked += 1,
            DocumentStatus::Reviewing => stats.reviewing += 1,
            DocumentStatus::Approved => stats.approved += 1,
            DocumentStatus::Failed => stats.failed += 1,
            DocumentStatus::Unrecognized(_) => stats.unrecognized += 1,
        }

        if state
            .policy()
            .is_stalled(&record.status, record.updated_at.as_deref(), now)
        {
            stats.stalled += 1;
        }
    }

    Json(stats)
}
