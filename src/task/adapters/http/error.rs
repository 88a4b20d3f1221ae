//! HTTP error mapping for task handlers.
//!
//! [`ApiError`] is the single place where domain and service outcomes turn
//! into status codes. Not-found outcomes are answered with a plain-text body;
//! every other error carries an [`ApiErrorResponse`] JSON payload.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::task::{
    ports::TaskRepositoryError, services::TaskServiceError, validation::ValidationError,
};

/// Message returned for unexpected failures; details are only logged.
const INTERNAL_MESSAGE: &str = "internal server error";

/// One rejected request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ViolationBody {
    /// JSON name of the rejected field.
    pub field: String,
    /// Why the field was rejected.
    pub message: String,
}

/// Error detail payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorDetail {
    /// Stable error code identifier.
    pub error_code: String,
    /// Human readable message.
    pub message: String,
    /// Per-field violations for rejected task payloads.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<ViolationBody>,
}

/// JSON error response wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// Error detail.
    pub error: ApiErrorDetail,
}

/// Errors produced by task handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The creation payload failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The request could not be interpreted (bad path id, malformed JSON).
    #[error("{message}")]
    BadRequest {
        /// Human readable message.
        message: String,
    },
    /// The referenced task does not exist.
    #[error("{message}")]
    TaskNotFound {
        /// Human readable message, sent as the plain-text body.
        message: String,
    },
    /// No route matches the request path.
    #[error("no route for {path}")]
    RouteNotFound {
        /// Requested path.
        path: String,
    },
    /// The route exists but not for this method.
    #[error("method not allowed")]
    MethodNotAllowed,
    /// Unexpected failure, typically from persistence.
    #[error("{message}")]
    Internal {
        /// Human readable message.
        message: String,
    },
}

impl ApiError {
    /// Creates a bad-request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    fn payload(error_code: &str, message: String) -> ApiErrorResponse {
        ApiErrorResponse {
            error: ApiErrorDetail {
                error_code: error_code.to_owned(),
                message,
                violations: Vec::new(),
            },
        }
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::NotFound { message, .. } => Self::TaskNotFound { message },
            TaskServiceError::Repository(source) => source.into(),
        }
    }
}

impl From<TaskRepositoryError> for ApiError {
    fn from(err: TaskRepositoryError) -> Self {
        tracing::error!(error = %err, "task repository failure");
        Self::Internal {
            message: INTERNAL_MESSAGE.to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(err) => {
                let violations = err
                    .violations()
                    .iter()
                    .map(|violation| ViolationBody {
                        field: violation.field.as_str().to_owned(),
                        message: violation.message.to_owned(),
                    })
                    .collect();
                let payload = ApiErrorResponse {
                    error: ApiErrorDetail {
                        error_code: "VALIDATION_FAILED".to_owned(),
                        message: "task request is invalid".to_owned(),
                        violations,
                    },
                };
                (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
            }
            Self::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                axum::Json(Self::payload("BAD_REQUEST", message)),
            )
                .into_response(),
            Self::TaskNotFound { message } => (StatusCode::NOT_FOUND, message).into_response(),
            Self::RouteNotFound { path } => (
                StatusCode::NOT_FOUND,
                axum::Json(Self::payload("NOT_FOUND", format!("no route for {path}"))),
            )
                .into_response(),
            Self::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                axum::Json(Self::payload(
                    "METHOD_NOT_ALLOWED",
                    "method not allowed".to_owned(),
                )),
            )
                .into_response(),
            Self::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                axum::Json(Self::payload("INTERNAL", message)),
            )
                .into_response(),
        }
    }
}

/// Result type for task handlers.
pub type ApiResult<T> = Result<T, ApiError>;
