//! Configuration for the status service

use serde::{Deserialize, Serialize};

/// Heartbeat gap beyond which a processing document is considered stalled (5 minutes)
pub const STALLED_THRESHOLD_MS: u64 = 300_000;

/// Interval at which clients are expected to re-poll status endpoints (3 seconds)
pub const POLLING_INTERVAL_MS: u64 = 3_000;

/// Main service configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatusConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Status tracker configuration
    pub tracker: TrackerConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            enable_cors: true,
        }
    }
}

/// Status tracker configuration
///
/// Thresholds are passed into the stall policy explicitly rather than read
/// from a global, so tests can tighten them without process-wide mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Heartbeat gap before a processing document counts as stalled, in milliseconds
    pub stall_threshold_ms: u64,
    /// Recommended client polling interval, in milliseconds
    pub polling_interval_ms: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            stall_threshold_ms: STALLED_THRESHOLD_MS,
            polling_interval_ms: POLLING_INTERVAL_MS,
        }
    }
}
