//! In-memory registries for document and index build state
//!
//! The pipeline jobs own these rows; this store is the opaque seam through
//! which the service reads them and through which the reprocess action and
//! the job callbacks write status + heartbeat. Nothing else is mutated here.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use crate::types::{DocumentRecord, DocumentStatus, RagIndexConfig};

/// Persisted index build state for one chatbot
#[derive(Debug, Clone, Default)]
pub struct IndexState {
    /// Raw persisted status value, absent when no build was ever requested
    pub raw_status: Option<String>,
    /// Optional build metadata
    pub config: Option<RagIndexConfig>,
}

/// Registry of document rows and per-chatbot index state
#[derive(Debug, Default)]
pub struct StatusStore {
    documents: DashMap<Uuid, DocumentRecord>,
    indexes: DashMap<Uuid, IndexState>,
}

impl StatusStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document row
    pub fn insert_document(&self, record: DocumentRecord) {
        self.documents.insert(record.id, record);
    }

    /// Get a document row by ID
    pub fn document(&self, id: &Uuid) -> Option<DocumentRecord> {
        self.documents.get(id).map(|r| r.clone())
    }

    /// List all document rows
    pub fn list_documents(&self) -> Vec<DocumentRecord> {
        self.documents.iter().map(|e| e.value().clone()).collect()
    }

    /// Set a document's status and refresh its heartbeat
    ///
    /// Returns the updated row, or `None` when the document is unknown.
    pub fn set_document_status(
        &self,
        id: &Uuid,
        status: DocumentStatus,
        now: DateTime<Utc>,
    ) -> Option<DocumentRecord> {
        let mut entry = self.documents.get_mut(id)?;
        entry.status = status;
        entry.updated_at = Some(now.to_rfc3339());
        Some(entry.clone())
    }

    /// Remove a document row
    pub fn remove_document(&self, id: &Uuid) -> Option<DocumentRecord> {
        self.documents.remove(id).map(|(_, r)| r)
    }

    /// Get the index build state for a chatbot
    pub fn index_state(&self, chatbot_id: &Uuid) -> Option<IndexState> {
        self.indexes.get(chatbot_id).map(|s| s.clone())
    }

    /// Replace the index build state for a chatbot
    pub fn set_index_state(&self, chatbot_id: Uuid, state: IndexState) {
        self.indexes.insert(chatbot_id, state);
    }
}
