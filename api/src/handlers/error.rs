//! Mapping of domain failures to HTTP responses

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;
use validator::ValidationErrors;

use ed_core::errors::{DomainError, VerificationFailure};
use ed_shared::ApiResponse;

/// Errors returned by the reset endpoints
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Verification(#[from] VerificationFailure),

    #[error("{0}")]
    ResetFailed(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Stable machine-readable code placed in the response body
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::Verification(failure) => failure.error_code(),
            ApiError::ResetFailed(_) => "RESET_FAILED",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::Validation { message } => ApiError::Validation(message),
            DomainError::Verification(failure) => ApiError::Verification(failure),
            DomainError::ResetFailed { message } => ApiError::ResetFailed(message),
            DomainError::Internal { message } => ApiError::Internal(message),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let fields: Vec<&str> = errors.field_errors().keys().copied().collect();
        ApiError::Validation(format!("Invalid request data: {}", fields.join(", ")))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Verification(failure) => match failure {
                VerificationFailure::DeliveryFailure { .. } => StatusCode::SERVICE_UNAVAILABLE,
                VerificationFailure::NoActiveCode => StatusCode::NOT_FOUND,
                VerificationFailure::CodeExpired => StatusCode::GONE,
                VerificationFailure::CodeMismatch => StatusCode::BAD_REQUEST,
            },
            ApiError::ResetFailed(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, code = self.error_code(), "Request failed");
        } else {
            tracing::warn!(error = %self, code = self.error_code(), "Request rejected");
        }

        HttpResponse::build(status).json(ApiResponse::<()>::error(
            self.error_code(),
            self.to_string(),
        ))
    }
}
