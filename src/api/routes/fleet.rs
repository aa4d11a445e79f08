//! Fleet Routes
//!
//! - GET /api/v1/fleet - Statewide fleet cards
//! - GET /api/v1/fleet?county=X&hour=H - Cards for one county

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use super::resolve_hour;
use crate::api::dto::ViewParams;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::view::{county_cards, statewide_cards, SummaryCards};

/// GET /api/v1/fleet
pub async fn fleet_cards(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ViewParams>,
) -> ApiResult<Json<SummaryCards>> {
    let cards = match params.county.as_deref() {
        None | Some("") => statewide_cards(&state.dataset),
        Some(county) => {
            let hour = resolve_hour(&state, params.hour.as_deref())?;
            county_cards(&state.dataset, county, hour)?
        }
    };

    Ok(Json(cards))
}
