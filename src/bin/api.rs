//! evdash API Server
//!
//! Run with: cargo run --bin evdash-api
//!
//! # Configuration
//!
//! Read from the first `config.toml` found in `~/.config/evdash/`,
//! `/etc/evdash/` or the working directory, then overridden by:
//! - `EVDASH_DATASET`: GeoJSON dataset path (default: data/ev_demand.geojson)
//! - `EVDASH_DEFAULT_HOUR`: Hour shown on load (default: 12)
//! - `EVDASH_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `EVDASH_API_PORT`: Port to listen on (default: 8090)
//! - `EVDASH_LOG_LEVEL` / `EVDASH_LOG_FORMAT`: Logging (default: info / pretty)
//! - `RUST_LOG`: Full filter directive, wins over the level above

use anyhow::Context;
use evdash::api::{serve, AppState};
use evdash::config::Config;
use evdash::dataset::Dataset;
use evdash::telemetry::init_tracing;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    init_tracing(&config.logging)?;

    tracing::info!("Starting evdash API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Dataset: {:?}", config.dataset.path);

    let dataset = match Dataset::load(&config.dataset.path) {
        Ok(dataset) => Arc::new(dataset),
        Err(e) => {
            tracing::error!(error = %e, "Dataset is not loaded, aborting startup");
            return Err(e).context("loading demand dataset");
        }
    };

    let report = dataset.report();
    if report.skipped_unnamed > 0 || report.duplicates_dropped > 0 {
        tracing::warn!(
            skipped = report.skipped_unnamed,
            duplicates = report.duplicates_dropped,
            "Dataset had features that were not loaded"
        );
    }

    let state = AppState::new(dataset, &config).context("invalid default hour")?;

    tracing::info!("Starting server on {}", config.api.addr());
    serve(state, &config.api).await?;

    tracing::info!("evdash API server stopped");
    Ok(())
}
