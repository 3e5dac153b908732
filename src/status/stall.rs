//! Stall detection for processing documents
//!
//! The ingestion job refreshes `updated_at` on every step as a liveness
//! signal. A processing row whose heartbeat has not advanced within the
//! threshold means the job likely died without reporting failure.

use chrono::{DateTime, Duration, Utc};

use crate::config::TrackerConfig;
use crate::types::DocumentStatus;

/// Stall policy with an explicit threshold
///
/// The threshold is carried in the policy value rather than read from a
/// global, so tests can pin it alongside a fixed clock.
#[derive(Debug, Clone, Copy)]
pub struct StallPolicy {
    threshold: Duration,
}

impl StallPolicy {
    /// Create a policy with the given threshold in milliseconds
    ///
    /// Thresholds beyond `i64::MAX` milliseconds are clamped rather than
    /// wrapped, so an absurdly large configured value means "never stalls"
    /// instead of "always stalls".
    pub fn new(threshold_ms: u64) -> Self {
        Self {
            threshold: Duration::milliseconds(i64::try_from(threshold_ms).unwrap_or(i64::MAX)),
        }
    }

    /// Create a policy from tracker configuration
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self::new(config.stall_threshold_ms)
    }

    /// Decide whether a document is stalled
    ///
    /// Only actively-processing documents can stall. A missing or
    /// unparseable heartbeat is treated as the worst case: the writer is
    /// assumed dead. The comparison is strict, so a heartbeat exactly at
    /// the threshold is still considered alive.
    pub fn is_stalled(
        &self,
        status: &DocumentStatus,
        updated_at: Option<&str>,
        now: DateTime<Utc>,
    ) -> bool {
        if *status != DocumentStatus::Processing {
            return false;
        }

        let Some(raw) = updated_at else {
            return true;
        };

        match DateTime::parse_from_rfc3339(raw) {
            Ok(heartbeat) => {
                now.signed_duration_since(heartbeat.with_timezone(&Utc)) > self.threshold
            }
            Err(_) => true,
        }
    }
}

impl Default for StallPolicy {
    fn default() -> Self {
        Self::new(crate::config::STALLED_THRESHOLD_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn heartbeat(seconds_ago: i64) -> String {
        (now() - Duration::seconds(seconds_ago)).to_rfc3339()
    }

    #[test]
    fn test_only_processing_documents_can_stall() {
        let policy = StallPolicy::default();
        let ancient = heartbeat(3600);

        for status in [
            DocumentStatus::Uploaded,
            DocumentStatus::Chunked,
            DocumentStatus::Reviewing,
            DocumentStatus::Approved,
            DocumentStatus::Failed,
            DocumentStatus::Unrecognized("quarantined".to_string()),
        ] {
            assert!(!policy.is_stalled(&status, Some(&ancient), now()));
            assert!(!policy.is_stalled(&status, None, now()));
        }
    }

    #[test]
    fn test_fresh_heartbeat_is_not_stalled() {
        let policy = StallPolicy::default();
        let fresh = heartbeat(4 * 60 + 59);
        assert!(!policy.is_stalled(&DocumentStatus::Processing, Some(&fresh), now()));
    }

    #[test]
    fn test_heartbeat_exactly_at_threshold_is_not_stalled() {
        // Strict inequality: exactly five minutes old still counts as alive
        let policy = StallPolicy::default();
        let boundary = heartbeat(5 * 60);
        assert!(!policy.is_stalled(&DocumentStatus::Processing, Some(&boundary), now()));
    }

    #[test]
    fn test_heartbeat_past_threshold_is_stalled() {
        let policy = StallPolicy::default();
        let stale = heartbeat(5 * 60 + 1);
        assert!(policy.is_stalled(&DocumentStatus::Processing, Some(&stale), now()));
    }

    #[test]
    fn test_one_millisecond_past_threshold_is_stalled() {
        let policy = StallPolicy::default();
        let barely_stale = (now() - Duration::milliseconds(5 * 60 * 1000 + 1)).to_rfc3339();
        assert!(policy.is_stalled(&DocumentStatus::Processing, Some(&barely_stale), now()));
    }

    #[test]
    fn test_missing_heartbeat_is_stalled() {
        let policy = StallPolicy::default();
        assert!(policy.is_stalled(&DocumentStatus::Processing, None, now()));
    }

    #[test]
    fn test_unparseable_heartbeat_is_stalled() {
        let policy = StallPolicy::default();
        assert!(policy.is_stalled(&DocumentStatus::Processing, Some("not-a-timestamp"), now()));
        assert!(policy.is_stalled(&DocumentStatus::Processing, Some(""), now()));
    }

    #[test]
    fn test_repeated_calls_agree() {
        let policy = StallPolicy::default();
        let stale = heartbeat(10 * 60);
        let first = policy.is_stalled(&DocumentStatus::Processing, Some(&stale), now());
        let second = policy.is_stalled(&DocumentStatus::Processing, Some(&stale), now());
        assert_eq!(first, second);
    }

    #[test]
    fn test_threshold_override() {
        let policy = StallPolicy::new(1_000);
        let two_seconds = heartbeat(2);
        assert!(policy.is_stalled(&DocumentStatus::Processing, Some(&two_seconds), now()));
    }

    #[test]
    fn test_oversized_threshold_clamps_instead_of_wrapping() {
        let policy = StallPolicy::new(u64::MAX);
        let stale = heartbeat(3600);
        assert!(!policy.is_stalled(&DocumentStatus::Processing, Some(&stale), now()));
    }
}
