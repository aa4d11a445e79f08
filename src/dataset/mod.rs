//! EV Demand Dataset
//!
//! The read-only record set every view is computed from:
//!
//! - **types**: `Hour`, `FleetCounts`, `DemandRecord`
//! - **coerce**: lenient numeric/text conversion of feature properties
//! - **loader**: GeoJSON feature collection → `Dataset`
//! - **store**: the in-memory accessor with hour/county views
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use evdash::dataset::{Dataset, Hour};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Dataset::load(Path::new("data/ev_demand.geojson"))?;
//!     let noon = dataset.at_hour(Hour::NOON).count();
//!     println!("{} counties report at noon", noon);
//!     Ok(())
//! }
//! ```

pub mod coerce;
pub mod error;
pub mod loader;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::{DatasetError, DatasetResult};
pub use loader::props;
pub use store::{Dataset, LoadReport};
pub use types::{DemandRecord, FleetCounts, Hour, HOURS_PER_DAY};
