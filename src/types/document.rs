//! Document status types
//!
//! Statuses are written by the external ingestion job and read back here.
//! Values the job writes today are the six known variants, but rows written
//! by older deployments can carry anything, so parsing is total: an unknown
//! value is preserved verbatim instead of rejected.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Status of a document in the ingestion pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentStatus {
    /// Uploaded, waiting to be picked up by the ingestion job
    Uploaded,
    /// Ingestion job is actively working on it
    Processing,
    /// Chunking finished, embeddings stored
    Chunked,
    /// Waiting for human review
    Reviewing,
    /// Approved for retrieval
    Approved,
    /// Ingestion job reported failure
    Failed,
    /// Persisted value not in the known set, kept verbatim
    Unrecognized(String),
}

impl DocumentStatus {
    /// Parse a persisted status value; never fails
    pub fn parse(raw: &str) -> Self {
        match raw {
            "uploaded" => Self::Uploaded,
            "processing" => Self::Processing,
            "chunked" => Self::Chunked,
            "reviewing" => Self::Reviewing,
            "approved" => Self::Approved,
            "failed" => Self::Failed,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// Raw wire form of the status
    pub fn as_str(&self) -> &str {
        match self {
            Self::Uploaded => "uploaded",
            Self::Processing => "processing",
            Self::Chunked => "chunked",
            Self::Reviewing => "reviewing",
            Self::Approved => "approved",
            Self::Failed => "failed",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DocumentStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DocumentStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// A document row as the ingestion job persists it
///
/// `updated_at` is kept in its raw persisted form: the stall detector is the
/// one place that parses it, and a corrupt value has defined behavior there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Document ID
    pub id: Uuid,
    /// Original filename as uploaded
    pub filename: String,
    /// Current pipeline status
    pub status: DocumentStatus,
    /// Heartbeat timestamp (RFC 3339), refreshed by the job on every step
    pub updated_at: Option<String>,
}

impl DocumentRecord {
    /// Create a record for a freshly uploaded document
    pub fn new(filename: String, now: chrono::DateTime<chrono::Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            filename,
            status: DocumentStatus::Uploaded,
            updated_at: Some(now.to_rfc3339()),
        }
    }
}
