//! Export Routes
//!
//! - GET /api/v1/export?hour=H&format=csv|json - Download the county table

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use std::sync::Arc;

use super::resolve_hour;
use crate::api::dto::ExportParams;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::view::county_table;

/// GET /api/v1/export
///
/// Export the table for one hour as an attachment.
pub async fn export_table(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExportParams>,
) -> ApiResult<Response> {
    let hour = resolve_hour(&state, params.hour.as_deref())?;
    let table = county_table(&state.dataset, hour);

    let format = params.format.to_lowercase();
    let (content_type, extension, body) = match format.as_str() {
        "csv" => ("text/csv", "csv", table.to_csv()?),
        "json" => (
            "application/json",
            "json",
            serde_json::to_string_pretty(&table)
                .map_err(|e| ApiError::Internal(format!("Serialization failed: {}", e)))?,
        ),
        other => {
            return Err(ApiError::Validation(format!(
                "Unsupported export format: {} (expected csv or json)",
                other
            )))
        }
    };

    let filename = format!(
        "ev_demand_hour{:02}_{}.{}",
        hour.get(),
        Utc::now().format("%Y%m%d_%H%M%S"),
        extension
    );

    tracing::info!(hour = %hour, rows = table.rows.len(), format = %format, "Exported county table");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        Body::from(body),
    )
        .into_response())
}
