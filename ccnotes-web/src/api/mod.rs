//! HTTP handlers for ccnotes-web

pub mod admin;
pub mod health;
pub mod viewer;

pub use admin::admin_routes;
pub use health::health_routes;
pub use viewer::viewer_routes;

use crate::error::{ApiError, ApiResult};

/// Parse a path id; anything that is not an id cannot name a record
pub(crate) fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::NotFound(format!("id {}", raw)))
}
