//! Application error types and Axum response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use persona_core::{ModelError, ValidationError};

use crate::dto::ErrorResponse;

pub const INVALID_RESPONSES: &str = "Invalid responses format or values.";
pub const REPORT_FAILED: &str = "Failed to generate personality report.";

/// Client-facing errors. Causes are logged where they occur and never returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppError {
    InvalidResponses,
    ReportFailed,
}

impl From<ValidationError> for AppError {
    fn from(_: ValidationError) -> Self {
        AppError::InvalidResponses
    }
}

impl From<ModelError> for AppError {
    fn from(_: ModelError) -> Self {
        AppError::ReportFailed
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::InvalidResponses => (StatusCode::BAD_REQUEST, INVALID_RESPONSES),
            AppError::ReportFailed => (StatusCode::INTERNAL_SERVER_ERROR, REPORT_FAILED),
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}
