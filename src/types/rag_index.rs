//! RAG index build status types
//!
//! Each chatbot has at most one background index build; the build job owns
//! the state transitions (idle -> running -> succeeded/failed) and this
//! service only projects the persisted row for polling clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a chatbot's background index build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RagIndexStatus {
    /// No build has run or been requested
    #[default]
    Idle,
    /// Build in progress
    Running,
    /// Last build completed
    Succeeded,
    /// Last build failed
    Failed,
}

impl RagIndexStatus {
    /// Parse a persisted status value; unknown values yield `None`
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "idle" => Some(Self::Idle),
            "running" => Some(Self::Running),
            "succeeded" => Some(Self::Succeeded),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }

    /// Raw wire form of the status
    pub fn as_str(&self) -> &str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

/// Optional index build metadata persisted per chatbot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RagIndexConfig {
    /// When the index was last generated successfully
    pub last_generated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_values() {
        assert_eq!(RagIndexStatus::parse("idle"), Some(RagIndexStatus::Idle));
        assert_eq!(RagIndexStatus::parse("running"), Some(RagIndexStatus::Running));
        assert_eq!(RagIndexStatus::parse("succeeded"), Some(RagIndexStatus::Succeeded));
        assert_eq!(RagIndexStatus::parse("failed"), Some(RagIndexStatus::Failed));
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        assert_eq!(RagIndexStatus::parse("complete"), None);
        assert_eq!(RagIndexStatus::parse(""), None);
    }

    #[test]
    fn test_default_is_idle() {
        assert_eq!(RagIndexStatus::default(), RagIndexStatus::Idle);
    }
}
