use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors returned to HTTP callers. Rendered as a plain-text message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Incorrect number of path segments")]
    PathSegments,

    #[error("Request path is not valid UTF-8")]
    InvalidPath,

    #[error("Movie ID exceeds allowed length")]
    IdTooLong,

    /// Upstream failure; `status` has already been through [`map_status`].
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },
}

impl ApiError {
    pub fn upstream(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError::Upstream {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::PathSegments | ApiError::InvalidPath | ApiError::IdTooLong => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Upstream { status, .. } => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// Translate an internal or upstream status into the status exposed to callers.
///
/// Only 404 survives; everything else becomes 500. Callers never pass 200 here,
/// so seeing one is logged as a bug.
pub fn map_status(status: StatusCode) -> StatusCode {
    if status == StatusCode::OK {
        tracing::warn!("status mapping called with a success code");
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    if status == StatusCode::NOT_FOUND {
        return StatusCode::NOT_FOUND;
    }
    StatusCode::INTERNAL_SERVER_ERROR
}
