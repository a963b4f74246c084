use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use super::app_error::AppError;
use crate::shared::validation::FieldViolation;

/// Structured error returned by the HTTP surface
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub kind: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldViolation>,
}

#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    error: &'a ApiError,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into()).into()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        let status = match &err {
            AppError::Validation(_) | AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Subscription(_) | AppError::ServiceUnavailable(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::Persistence(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let (message, details) = match &err {
            AppError::Validation(errors) => {
                ("Validation failed".to_string(), errors.violations().to_vec())
            }
            // Store messages stay in the logs, not in the response body
            AppError::Persistence(_) | AppError::Internal(_) => {
                ("Internal server error".to_string(), Vec::new())
            }
            AppError::NotFound(msg)
            | AppError::InvalidInput(msg)
            | AppError::Subscription(msg)
            | AppError::ServiceUnavailable(msg) => (msg.clone(), Vec::new()),
        };

        if status.is_server_error() {
            log::error!("[{}] {}", err.kind(), err);
        } else {
            log::debug!("[{}] {}", err.kind(), err);
        }

        Self {
            status,
            kind: err.kind(),
            message,
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(ErrorEnvelope { error: &self })).into_response()
    }
}
