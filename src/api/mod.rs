//! evdash REST API
//!
//! HTTP API layer, built with Axum.
//!
//! # Endpoints
//!
//! ## Dataset
//! - `GET /api/v1/dataset` - Record counts and load report
//! - `GET /api/v1/counties` - County names
//! - `GET /api/v1/counties/:county/demand` - One county's 24-hour chart
//!
//! ## Charts and cards
//! - `GET /api/v1/demand/average` - Statewide average demand by hour
//! - `GET /api/v1/fleet` - Fleet cards, statewide or `?county=`
//!
//! ## Map
//! - `GET /api/v1/map?hour=` - Choropleth layer (GeoJSON)
//! - `GET /api/v1/map/legend` - Colour legend
//! - `GET /api/v1/map/home` - Home view and base tiles
//!
//! ## Table
//! - `GET /api/v1/table?hour=` - County table
//! - `GET /api/v1/export?hour=&format=` - Table download (csv, json)
//!
//! ## View
//! - `GET /api/v1/view?hour=&county=` - Full dashboard render
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! ## WebSocket
//! - `GET /ws` - Interactive dashboard session
//!
//! # Example
//!
//! ```rust,ignore
//! use evdash::api::{serve, AppState};
//! use evdash::config::Config;
//! use evdash::dataset::Dataset;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let dataset = Arc::new(Dataset::load(&config.dataset.path)?);
//!
//!     let state = AppState::new(dataset, &config)?;
//!     serve(state, &config.api).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{http::HeaderValue, routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ApiConfig;
use crate::websocket::websocket_handler;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Dataset routes
        .route("/dataset", get(routes::dataset::dataset_summary))
        .route("/counties", get(routes::dataset::list_counties))
        .route("/counties/:county/demand", get(routes::dataset::county_demand))
        // Chart and card routes
        .route("/demand/average", get(routes::demand::average_demand))
        .route("/fleet", get(routes::fleet::fleet_cards))
        // Map routes
        .route("/map", get(routes::map::map_layer))
        .route("/map/legend", get(routes::map::map_legend))
        .route("/map/home", get(routes::map::home_view))
        // Table routes
        .route("/table", get(routes::table::table))
        .route("/export", get(routes::export::export_table))
        // Full render
        .route("/view", get(routes::view::dashboard_view));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.api);
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .route("/ws", get(websocket_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Permissive CORS unless specific origins are configured
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new().allow_origin(origins)
    }
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("evdash API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("evdash API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
