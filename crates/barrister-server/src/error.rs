use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use barrister_core::error::AppError;

use crate::dto::{ErrorResponse, ValidationErrorResponse, Violation};

/// Every failure the API reports. All of them map to 400.
#[derive(Debug)]
pub enum ApiError {
    /// A core error. Field violations are listed, anything else is collapsed.
    App(AppError),
    /// DELETE without an `id` query parameter.
    MissingId,
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        Self::App(AppError::InvalidRequest(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = match self {
            ApiError::MissingId => {
                let body = ErrorResponse {
                    error: "id required".to_string(),
                };
                return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
            }
            ApiError::App(err) => err,
        };

        if let Some(violations) = err.field_errors() {
            tracing::debug!(error = %err, "Rejected request body");
            let body = ValidationErrorResponse {
                error: violations.iter().map(Violation::from).collect(),
            };
            return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
        }

        tracing::warn!(error = %err, "Request failed");
        let body = ErrorResponse {
            error: "Invalid request".to_string(),
        };
        (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
    }
}
