//! Application state for the status server

use parking_lot::RwLock;
use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::config::StatusConfig;
use crate::status::StallPolicy;
use crate::store::StatusStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: StatusConfig,
    /// Stall policy derived from the tracker configuration
    policy: StallPolicy,
    /// Document and index registries
    store: StatusStore,
    /// Time source, swappable in tests
    clock: Arc<dyn Clock>,
    /// Ready state
    ready: RwLock<bool>,
}

impl AppState {
    /// Create new application state with the system clock
    pub fn new(config: StatusConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create application state with an explicit clock
    ///
    /// Starts not-ready; the server flips readiness once it is listening.
    pub fn with_clock(config: StatusConfig, clock: Arc<dyn Clock>) -> Self {
        let policy = StallPolicy::from_config(&config.tracker);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                policy,
                store: StatusStore::new(),
                clock,
                ready: RwLock::new(false),
            }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &StatusConfig {
        &self.inner.config
    }

    /// Get the stall policy
    pub fn policy(&self) -> &StallPolicy {
        &self.inner.policy
    }

    /// Get the status store
    pub fn store(&self) -> &StatusStore {
        &self.inner.store
    }

    /// Get the clock
    pub fn clock(&self) -> &dyn Clock {
        self.inner.clock.as_ref()
    }

    /// Check if the server is ready
    pub fn is_ready(&self) -> bool {
        *self.inner.ready.read()
    }

    /// Set ready state
    pub fn set_ready(&self, ready: bool) {
        *self.inner.ready.write() = ready;
    }
}
