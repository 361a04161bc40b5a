//! Verification failure taxonomy
//!
//! Every failure of the one-time code gate is recoverable and user facing.
//! The `Display` text of each variant is the message returned to the caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons an issue or verify call did not succeed
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VerificationFailure {
    /// The code could not be delivered (or stored); nothing remains valid
    #[error("Failed to send OTP: {reason}")]
    DeliveryFailure { reason: String },

    /// Nothing was issued, or the last code was already consumed
    #[error("No OTP has been sent or it has already been used.")]
    NoActiveCode,

    /// The code outlived its window and has been discarded
    #[error("OTP has expired. Please request a new one.")]
    CodeExpired,

    /// A live code exists but the submitted value differs
    #[error("Invalid code.")]
    CodeMismatch,
}

impl VerificationFailure {
    /// Stable machine-readable code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            VerificationFailure::DeliveryFailure { .. } => "DELIVERY_FAILURE",
            VerificationFailure::NoActiveCode => "NO_ACTIVE_CODE",
            VerificationFailure::CodeExpired => "CODE_EXPIRED",
            VerificationFailure::CodeMismatch => "CODE_MISMATCH",
        }
    }

    pub fn delivery(reason: impl Into<String>) -> Self {
        VerificationFailure::DeliveryFailure {
            reason: reason.into(),
        }
    }
}
