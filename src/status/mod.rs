//! Status derivation layer
//!
//! Pure functions over (status, heartbeat, now). The ingestion job and the
//! index build job own the state; everything here is a stateless projection
//! of what they persisted, safe under arbitrary concurrent invocation.

pub mod index_view;
pub mod label;
pub mod reprocess;
pub mod stall;

pub use index_view::rag_index_view;
pub use label::{status_label, STALLED_LABEL};
pub use reprocess::{can_reprocess, ALWAYS_REPROCESSABLE};
pub use stall::StallPolicy;
