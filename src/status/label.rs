//! Display labels for document statuses

use crate::types::DocumentStatus;

/// Label shown when the stalled flag overrides the raw status
pub const STALLED_LABEL: &str = "Stalled";

/// Map a status and its stalled flag to a display label
///
/// Total over all inputs: a stalled document shows the stalled label no
/// matter what the row says, and an unrecognized status is surfaced
/// verbatim rather than turned into an error.
pub fn status_label(status: &DocumentStatus, is_stalled: bool) -> &str {
    if is_stalled {
        return STALLED_LABEL;
    }

    match status {
        DocumentStatus::Uploaded => "Uploaded",
        DocumentStatus::Processing => "Processing",
        DocumentStatus::Chunked => "Chunked",
        DocumentStatus::Reviewing => "In review",
        DocumentStatus::Approved => "Approved",
        DocumentStatus::Failed => "Failed",
        DocumentStatus::Unrecognized(raw) => raw,
    }
}
