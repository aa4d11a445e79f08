//! Table Routes
//!
//! - GET /api/v1/table?hour=H - One row per county for the hour

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use super::resolve_hour;
use crate::api::dto::HourParams;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::view::{county_table, CountyTable};

/// GET /api/v1/table
pub async fn table(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HourParams>,
) -> ApiResult<Json<CountyTable>> {
    let hour = resolve_hour(&state, params.hour.as_deref())?;
    Ok(Json(county_table(&state.dataset, hour)))
}
