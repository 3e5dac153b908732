//! Read projection for the per-chatbot index build status

use crate::types::{RagIndexConfig, RagIndexStatus, RagIndexStatusResponse};

/// Project the persisted index build state into a poll response
///
/// An absent status row means no build has ever been requested, which reads
/// as idle. A persisted value outside the known set is coerced to idle as
/// well, so a bad row never propagates an invalid enum downstream.
pub fn rag_index_view(
    persisted_status: Option<&str>,
    config: Option<&RagIndexConfig>,
) -> RagIndexStatusResponse {
    let status = match persisted_status {
        Some(raw) => RagIndexStatus::parse(raw).unwrap_or_else(|| {
            tracing::warn!("Unrecognized index status '{}', reporting idle", raw);
            RagIndexStatus::Idle
        }),
        None => RagIndexStatus::Idle,
    };

    RagIndexStatusResponse {
        status,
        last_generated_at: config.and_then(|c| c.last_generated_at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_empty_state_reads_as_idle() {
        let view = rag_index_view(None, None);
        assert_eq!(view.status, RagIndexStatus::Idle);
        assert_eq!(view.last_generated_at, None);
    }

    #[test]
    fn test_persisted_status_passes_through() {
        assert_eq!(rag_index_view(Some("running"), None).status, RagIndexStatus::Running);
        assert_eq!(rag_index_view(Some("succeeded"), None).status, RagIndexStatus::Succeeded);
        assert_eq!(rag_index_view(Some("failed"), None).status, RagIndexStatus::Failed);
    }

    #[test]
    fn test_unrecognized_status_coerces_to_idle() {
        assert_eq!(rag_index_view(Some("complete"), None).status, RagIndexStatus::Idle);
    }

    #[test]
    fn test_last_generated_at_is_read_from_config() {
        let generated = Utc.with_ymd_and_hms(2025, 5, 30, 8, 15, 0).unwrap();
        let config = RagIndexConfig {
            last_generated_at: Some(generated),
        };

        let view = rag_index_view(Some("succeeded"), Some(&config));
        assert_eq!(view.last_generated_at, Some(generated));

        let empty = RagIndexConfig::default();
        assert_eq!(rag_index_view(Some("succeeded"), Some(&empty)).last_generated_at, None);
    }
}
