//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::{ApiConfig, Config, MapConfig};
use crate::dataset::{Dataset, DatasetResult, Hour};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The read-only demand dataset
    pub dataset: Arc<Dataset>,
    /// API configuration
    pub api: Arc<ApiConfig>,
    /// Map home view configuration
    pub map: Arc<MapConfig>,
    /// Hour used when a request or session names none
    pub default_hour: Hour,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state from a loaded dataset and the full config
    pub fn new(dataset: Arc<Dataset>, config: &Config) -> DatasetResult<Self> {
        Ok(Self {
            dataset,
            api: Arc::new(config.api.clone()),
            map: Arc::new(config.map.clone()),
            default_hour: config.dataset.initial_hour()?,
            start_time: Instant::now(),
        })
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
