//! Core types for the status service

pub mod document;
pub mod rag_index;
pub mod response;

pub use document::{DocumentRecord, DocumentStatus};
pub use rag_index::{RagIndexConfig, RagIndexStatus};
pub use response::{
    DocumentListResponse, DocumentStatsResponse, DocumentStatusResponse, DocumentSummary,
    RagIndexStatusResponse,
};
