//! HTTP error type
//!
//! Not-found maps to a 404 page. Every other failure maps to a generic 500
//! page; the underlying message is logged, never shown.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::view;

/// Handler error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Requested record does not exist (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage or other internal failure (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<ccnotes_common::Error> for ApiError {
    fn from(err: ccnotes_common::Error) -> Self {
        match err {
            ccnotes_common::Error::NotFound(what) => ApiError::NotFound(what),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, page) = match self {
            ApiError::NotFound(what) => {
                warn!("Not found: {}", what);
                (
                    StatusCode::NOT_FOUND,
                    view::error_page("Not Found", "The requested page does not exist."),
                )
            }
            ApiError::Internal(msg) => {
                error!("Request failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    view::error_page("Error", "Something went wrong. Please try again."),
                )
            }
        };

        (status, Html(page)).into_response()
    }
}

/// Handler result type
pub type ApiResult<T> = std::result::Result<T, ApiError>;
