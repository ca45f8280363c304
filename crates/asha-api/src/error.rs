//! API error types and JSON error response formatting.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use asha_chat::error::{ChatError, COMPOSITION_FAILED};
use asha_records::RecordError;

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code (e.g., "bad_request").
    pub error: String,
    /// Human-readable error message.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[derive(Debug)]
pub enum ApiError {
    /// 400 - malformed body or failed validation.
    BadRequest(String),
    /// 400 - a query parameter that does not parse.
    InvalidParameter { name: String, value: String },
    /// 400 - the chat pipeline could not produce a reply.
    ChatFailed { cause: String },
    /// 500 - unexpected server error.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message, details) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            ApiError::InvalidParameter { name, value } => (
                StatusCode::BAD_REQUEST,
                "invalid_parameter",
                format!("Invalid value for '{}': {:?}", name, value),
                Some(json!({ "param": name })),
            ),
            ApiError::ChatFailed { cause } => (
                StatusCode::BAD_REQUEST,
                "chat_failed",
                COMPOSITION_FAILED.to_string(),
                Some(json!({ "cause": cause })),
            ),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg, None)
            }
        };

        let body = ErrorBody {
            error: error_code.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::EmptyMessage | ChatError::MessageTooLong(_) => {
                ApiError::BadRequest(err.to_string())
            }
            ChatError::Composition { cause } => ApiError::ChatFailed { cause },
            ChatError::Storage(_) => ApiError::ChatFailed {
                cause: err.to_string(),
            },
        }
    }
}

impl From<RecordError> for ApiError {
    fn from(err: RecordError) -> Self {
        ApiError::Internal(err.to_string())
    }
}
