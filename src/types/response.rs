//! Response types for the status API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::document::{DocumentRecord, DocumentStatus};
use super::rag_index::RagIndexStatus;

/// Derived status payload for a single document, as polled by the console
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStatusResponse {
    /// Document ID
    pub document_id: Uuid,
    /// Raw pipeline status
    pub status: DocumentStatus,
    /// Whether the processing heartbeat has gone quiet past the threshold
    pub is_stalled: bool,
    /// Whether a reprocess action may be offered
    pub can_reprocess: bool,
    /// Display label, with stalled overriding the raw status
    pub label: String,
    /// Raw heartbeat value as persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// One row of the document list with its derived fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Document ID
    pub document_id: Uuid,
    /// Filename
    pub filename: String,
    /// Raw pipeline status
    pub status: DocumentStatus,
    /// Stalled flag
    pub is_stalled: bool,
    /// Reprocess button state
    pub can_reprocess: bool,
    /// Display label
    pub label: String,
}

/// Response for listing documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentListResponse {
    /// List of documents with derived status fields
    pub documents: Vec<DocumentSummary>,
    /// Total count
    pub total_count: usize,
}

/// Counts by status across all tracked documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStatsResponse {
    pub total: usize,
    pub uploaded: usize,
    pub processing: usize,
    pub chunked: usize,
    pub reviewing: usize,
    pub approved: usize,
    pub failed: usize,
    /// Processing documents whose heartbeat has gone quiet
    pub stalled: usize,
    /// Persisted values outside the known status set
    pub unrecognized: usize,
}

/// Status payload for a chatbot's background index build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RagIndexStatusResponse {
    /// Build status, defaulting to idle when nothing is persisted
    pub status: RagIndexStatus,
    /// When the index was last generated, if ever
    pub last_generated_at: Option<DateTime<Utc>>,
}

impl DocumentSummary {
    /// Build a summary row from a record and its derived flags
    pub fn from_record(
        record: &DocumentRecord,
        is_stalled: bool,
        can_reprocess: bool,
        label: String,
    ) -> Self {
        Self {
            document_id: record.id,
            filename: record.filename.clone(),
            status: record.status.clone(),
            is_stalled,
            can_reprocess,
            label,
        }
    }
}
