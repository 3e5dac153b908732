//! docpulse: ingestion status tracking for chatbot knowledge-base documents
//!
//! Documents are processed by an asynchronous background job (uploaded ->
//! processing -> chunked -> reviewing -> approved/failed) that refreshes a
//! heartbeat timestamp on every step. This crate derives what the polling
//! console needs from that heartbeat: whether the job has stalled, whether a
//! reprocess action may be offered, and what label to render. The same
//! pattern covers the per-chatbot RAG index build status.

pub mod clock;
pub mod config;
pub mod error;
pub mod server;
pub mod status;
pub mod store;
pub mod types;

pub use clock::{Clock, SystemClock};
pub use config::StatusConfig;
pub use error::{Error, Result};
pub use status::{can_reprocess, rag_index_view, status_label, StallPolicy};
pub use types::{DocumentRecord, DocumentStatus, RagIndexConfig, RagIndexStatus};
