use std::io;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::debug;

/// Request-level failures, all recovered at the HTTP boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Lookup miss; rendered as `{"message": ...}`.
    #[error("{0}")]
    NotFound(String),
    /// Body could not be decoded into the record shape; rendered as `{"error": ...}`.
    #[error("{0}")]
    MalformedInput(String),
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, serde_json::json!({"message": msg})),
            ApiError::MalformedInput(msg) => (StatusCode::BAD_REQUEST, serde_json::json!({"error": msg})),
        };
        debug!(status = status.as_u16(), %body, "request rejected");
        (status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },
    #[error("server terminated: {0}")]
    Serve(#[from] io::Error),
}
