//! Application error type and its HTTP mapping.
//!
//! Every error response has the shape `{ "error": "<message>", ...context }`:
//! the `details` object of a variant is flattened next to `error`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value, json};
use thiserror::Error;

use crate::application::shaping::ShapeError;
use crate::domain::{UpstreamError, YearError};

const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to fetch data from upstream API";
const INTERNAL_FAILURE_MESSAGE: &str = "Internal server error while fetching data";
const SCHEMA_FAILURE_MESSAGE: &str = "Unexpected data format from upstream API";

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or out-of-range client input (400).
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The mandatory source returned no data for the request (404).
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The mandatory source answered with a non-success status; mirrored as-is.
    #[error("{message} (HTTP {status})")]
    Upstream {
        status: StatusCode,
        message: String,
        details: Value,
    },

    /// Transport or parse failure (500).
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn upstream(status: StatusCode, message: impl Into<String>, details: Value) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Status code this error is rendered with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Upstream { status, .. } => *status,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<YearError> for AppError {
    fn from(e: YearError) -> Self {
        AppError::bad_request(e.to_string(), json!({}))
    }
}

impl From<UpstreamError> for AppError {
    fn from(e: UpstreamError) -> Self {
        match e {
            UpstreamError::Status { status } => AppError::upstream(
                // Codes outside 100..=999 cannot be mirrored.
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                UPSTREAM_FAILURE_MESSAGE,
                json!({ "upstreamStatus": status }),
            ),
            UpstreamError::Transport(reason) => {
                AppError::internal(INTERNAL_FAILURE_MESSAGE, json!({ "details": reason }))
            }
        }
    }
}

impl From<ShapeError> for AppError {
    fn from(e: ShapeError) -> Self {
        AppError::internal(SCHEMA_FAILURE_MESSAGE, json!({ "details": e.to_string() }))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Upstream {
                message, details, ..
            }
            | AppError::Internal { message, details } => (message, details),
        };

        let mut body = Map::new();
        body.insert("error".to_string(), Value::String(message));

        match details {
            Value::Object(context) => {
                for (key, value) in context {
                    if key != "error" {
                        body.insert(key, value);
                    }
                }
            }
            Value::Null => {}
            other => {
                body.insert("details".to_string(), other);
            }
        }

        (status, Json(Value::Object(body))).into_response()
    }
}
