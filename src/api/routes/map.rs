//! Map Routes
//!
//! - GET /api/v1/map?hour=H - Choropleth layer for one hour (GeoJSON)
//! - GET /api/v1/map/legend - Colour legend
//! - GET /api/v1/map/home - Home view and base tiles

use axum::{
    extract::{Query, State},
    Json,
};
use geojson::FeatureCollection;
use std::sync::Arc;

use super::resolve_hour;
use crate::api::dto::HourParams;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::view::{build_layer, legend, HomeView, LegendEntry};

/// GET /api/v1/map
pub async fn map_layer(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HourParams>,
) -> ApiResult<Json<FeatureCollection>> {
    let hour = resolve_hour(&state, params.hour.as_deref())?;
    Ok(Json(build_layer(&state.dataset, hour)))
}

/// GET /api/v1/map/legend
pub async fn map_legend() -> Json<Vec<LegendEntry>> {
    Json(legend())
}

/// GET /api/v1/map/home
pub async fn home_view(State(state): State<Arc<AppState>>) -> Json<HomeView> {
    Json(HomeView::from(state.map.as_ref()))
}
