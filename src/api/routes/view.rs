//! View Routes
//!
//! - GET /api/v1/view?hour=H&county=C - Full dashboard render in one response
//!
//! Stateless counterpart of the WebSocket session: the caller carries the
//! hour and focus in the query string.

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use super::resolve_hour;
use crate::api::dto::ViewParams;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::view::{DashboardView, ViewState};

/// GET /api/v1/view
pub async fn dashboard_view(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ViewParams>,
) -> ApiResult<Json<DashboardView>> {
    let mut view = ViewState::new(resolve_hour(&state, params.hour.as_deref())?);

    if let Some(county) = params.county.as_deref().filter(|c| !c.is_empty()) {
        view.focus_county(&state.dataset, county)?;
    }

    Ok(Json(view.render(&state.dataset)?))
}
