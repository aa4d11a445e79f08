//! Dashboard Views
//!
//! Everything the page draws, computed from the dataset:
//!
//! - **choropleth**: colour scale, polygon style, legend
//! - **layer**: the per-hour GeoJSON map layer, popups, home view
//! - **chart**: average-by-hour and per-county line series
//! - **table**: the per-hour county table and its export
//! - **cards**: statewide or per-county fleet cards
//! - **state**: selected hour and card focus, and the full re-render
//! - **format**: number formatting shared by cards and table

pub mod cards;
pub mod chart;
pub mod choropleth;
pub mod format;
pub mod layer;
pub mod state;
pub mod table;

pub use cards::{county_cards, statewide_cards, SummaryCards};
pub use chart::{average_demand_chart, county_demand_chart, ChartSeries, CountyChart};
pub use choropleth::{fill_color, legend, style_for, FeatureStyle, LegendEntry, THRESHOLDS};
pub use layer::{build_layer, chart_element_id, HomeView, PopupContent};
pub use state::{DashboardView, Focus, ViewState};
pub use table::{county_table, CountyTable, TableRow, COLUMNS};
