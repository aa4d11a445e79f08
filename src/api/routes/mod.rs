//! API Routes
//!
//! Route handlers organized by functionality.

pub mod dataset;
pub mod demand;
pub mod export;
pub mod fleet;
pub mod health;
pub mod map;
pub mod table;
pub mod view;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::dataset::Hour;

/// Parse an optional `hour` parameter, falling back to the default hour
pub(crate) fn resolve_hour(state: &AppState, hour: Option<&str>) -> ApiResult<Hour> {
    match hour {
        None => Ok(state.default_hour),
        Some(s) if s.trim().is_empty() => Ok(state.default_hour),
        Some(s) => Ok(s.parse::<Hour>()?),
    }
}
