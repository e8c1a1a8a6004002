//! HTTP error mapping and startup errors.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use dexgate_core::{ConfigError, GatewayError};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::warn;

/// Failure of a single request.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("invalid query string: {0}")]
    Query(#[from] QueryRejection),

    #[error("invalid path parameter: {0}")]
    Path(#[from] PathRejection),

    #[error("invalid request body: {0}")]
    Body(#[from] JsonRejection),

    #[error("x-user-id header must be valid UTF-8")]
    InvalidCaller,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Gateway(GatewayError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::Gateway(GatewayError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Gateway(GatewayError::Upstream(_)) => StatusCode::BAD_GATEWAY,
            Self::Query(_) | Self::Path(_) | Self::Body(_) | Self::InvalidCaller => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Gateway(error) => error.code(),
            Self::Query(_) | Self::Path(_) | Self::Body(_) | Self::InvalidCaller => {
                "BAD_USER_INPUT"
            }
        }
    }

    fn details(&self) -> Option<Value> {
        match self {
            Self::Gateway(GatewayError::Upstream(upstream)) => Some(json!({
                "kind": upstream.kind(),
                "code": upstream.code(),
                "status": upstream.http_status(),
                "reason": upstream.reason(),
            })),
            Self::Gateway(GatewayError::NotFound { identifier }) => {
                Some(json!({ "identifier": identifier }))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            warn!(status = status.as_u16(), error = %self, "request failed upstream");
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: self.error_code(),
                message: self.to_string(),
                details: self.details(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Reasons the server fails to start or stops abnormally.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid CORS origin '{value}'")]
    InvalidCorsOrigin { value: String },

    #[error("failed to initialize tracing: {0}")]
    Telemetry(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ServerError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::InvalidCorsOrigin { .. } => 2,
            Self::Telemetry(_) => 3,
            Self::Io(_) => 10,
        }
    }
}
