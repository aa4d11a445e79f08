//! # evdash
//!
//! EV demand dashboard - serves county/hour electric-vehicle demand as
//! choropleth map layers, charts, tables and summary cards.
//!
//! ## Modules
//!
//! - [`dataset`]: GeoJSON loading and the read-only record accessor
//! - [`aggregate`]: Hourly averages, fleet totals, per-county series
//! - [`view`]: Map layer, legend, charts, table, cards and view state
//! - [`api`]: REST API server with Axum
//! - [`websocket`]: Interactive dashboard sessions
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use evdash::aggregate::average_demand_by_hour;
//! use evdash::dataset::{Dataset, Hour};
//! use evdash::view::ViewState;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Dataset::load(Path::new("data/ev_demand.geojson"))?;
//!
//!     for avg in average_demand_by_hour(&dataset) {
//!         println!("{} {:.2} kWh", avg.hour.label(), avg.average);
//!     }
//!
//!     let mut state = ViewState::default();
//!     state.select_hour(Hour::new(18)?);
//!     let view = state.render(&dataset)?;
//!     println!("{} table rows at {}", view.table.rows.len(), view.hour_label);
//!
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod api;
pub mod config;
pub mod dataset;
pub mod telemetry;
pub mod view;
pub mod websocket;

// Re-export top-level types for convenience
pub use dataset::{
    Dataset, DatasetError, DatasetResult, DemandRecord, FleetCounts, Hour, LoadReport,
};

pub use aggregate::{
    average_demand_by_hour, county_demand_series, vehicle_totals_by_fleet_class, FleetTotals,
    HourlyAverage,
};

pub use view::{DashboardView, Focus, SummaryCards, ViewState};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig};

pub use websocket::{websocket_handler, ClientMessage, DashboardSession, ServerMessage};
