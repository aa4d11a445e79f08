//! Demand Routes
//!
//! - GET /api/v1/demand/average - Statewide average demand for each hour

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::aggregate::average_demand_by_hour;
use crate::api::dto::AverageDemandResponse;
use crate::api::state::AppState;
use crate::view::average_demand_chart;

/// GET /api/v1/demand/average
pub async fn average_demand(State(state): State<Arc<AppState>>) -> Json<AverageDemandResponse> {
    Json(AverageDemandResponse {
        averages: average_demand_by_hour(&state.dataset),
        chart: average_demand_chart(&state.dataset),
    })
}
