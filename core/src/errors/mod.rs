//! Domain-specific error types and error handling.

mod types;


pub use types::VerificationFailure;

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Factory reset failed: {message}")]
    ResetFailed { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error(transparent)]
    Verification(#[from] VerificationFailure),
}

pub type DomainResult<T> = Result<T, DomainError>;
