//! Application state for the Staffing Insight Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::clock::Clock;
use crate::config::EngineConfig;
use crate::store::ScheduleStore;

/// Shared application state.
///
/// Contains the collaborators every request handler needs: the data store,
/// the engine configuration, and the clock providing "today".
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ScheduleStore>,
    config: Arc<EngineConfig>,
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(store: Arc<dyn ScheduleStore>, config: EngineConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            config: Arc::new(config),
            clock,
        }
    }

    /// Returns the data store.
    pub fn store(&self) -> &dyn ScheduleStore {
        self.store.as_ref()
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the clock.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}
