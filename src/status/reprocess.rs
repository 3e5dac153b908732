//! Reprocessing eligibility
//!
//! A retry may only be offered when the job is provably dead or the document
//! sits in a resettable terminal state. Documents mid-flight and healthy must
//! never be reset underneath a live worker.

use chrono::{DateTime, Utc};

use super::stall::StallPolicy;
use crate::types::DocumentStatus;

/// Statuses that may be reprocessed regardless of heartbeat
pub const ALWAYS_REPROCESSABLE: [DocumentStatus; 2] =
    [DocumentStatus::Uploaded, DocumentStatus::Failed];

/// Decide whether a reprocess action may be offered for a document
pub fn can_reprocess(
    policy: &StallPolicy,
    status: &DocumentStatus,
    updated_at: Option<&str>,
    now: DateTime<Utc>,
) -> bool {
    if ALWAYS_REPROCESSABLE.contains(status) {
        return true;
    }

    // A stuck processing document becomes reprocessable; chunked, reviewing
    // and approved never do.
    policy.is_stalled(status, updated_at, now)
}
