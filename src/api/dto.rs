//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::aggregate::HourlyAverage;
use crate::dataset::{Hour, LoadReport};
use crate::view::ChartSeries;

// ============================================
// REQUEST PARAMETERS
// ============================================

/// `?hour=` selector; the configured default hour when absent
#[derive(Debug, Default, Deserialize)]
pub struct HourParams {
    #[serde(default)]
    pub hour: Option<String>,
}

/// Table export parameters
#[derive(Debug, Deserialize)]
pub struct ExportParams {
    #[serde(default)]
    pub hour: Option<String>,
    /// Output format: csv, json
    #[serde(default = "default_export_format")]
    pub format: String,
}

fn default_export_format() -> String {
    "csv".to_string()
}

/// Hour plus optional focused county, for cards and the full render
#[derive(Debug, Default, Deserialize)]
pub struct ViewParams {
    #[serde(default)]
    pub hour: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
}

// ============================================
// RESPONSES
// ============================================

/// Dataset overview
#[derive(Debug, Serialize)]
pub struct DatasetSummary {
    pub records: usize,
    pub counties: usize,
    /// Hours with at least one record
    pub hours: Vec<Hour>,
    pub report: LoadReport,
}

/// County name listing
#[derive(Debug, Serialize)]
pub struct CountyListResponse {
    pub total: usize,
    pub counties: Vec<String>,
}

/// Statewide average demand per hour, raw and as a chart series
#[derive(Debug, Serialize)]
pub struct AverageDemandResponse {
    pub averages: Vec<HourlyAverage>,
    pub chart: ChartSeries,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Dataset status: ok, empty
    pub dataset: String,
    pub records: usize,
    pub counties: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
