//! Dataset Routes
//!
//! - GET /api/v1/dataset - Record counts and load report
//! - GET /api/v1/counties - County names in dataset order
//! - GET /api/v1/counties/:county/demand - One county's 24-hour chart

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{CountyListResponse, DatasetSummary};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::view::{county_demand_chart, CountyChart};

/// GET /api/v1/dataset
pub async fn dataset_summary(State(state): State<Arc<AppState>>) -> Json<DatasetSummary> {
    let dataset = &state.dataset;

    Json(DatasetSummary {
        records: dataset.len(),
        counties: dataset.counties().len(),
        hours: dataset.hours_present(),
        report: *dataset.report(),
    })
}

/// GET /api/v1/counties
pub async fn list_counties(State(state): State<Arc<AppState>>) -> Json<CountyListResponse> {
    let counties = state.dataset.counties().to_vec();

    Json(CountyListResponse {
        total: counties.len(),
        counties,
    })
}

/// GET /api/v1/counties/:county/demand
///
/// Popup chart data, computed when the popup opens.
pub async fn county_demand(
    State(state): State<Arc<AppState>>,
    Path(county): Path<String>,
) -> ApiResult<Json<CountyChart>> {
    Ok(Json(county_demand_chart(&state.dataset, &county)?))
}
