use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendOtpRequest {
    /// Administrator phone number in E.164 format, e.g. "+923001234567"
    ///
    /// Spaces, dashes and parentheses are allowed and stripped before the
    /// E.164 check.
    #[validate(length(min = 8, max = 24))]
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConfirmResetRequest {
    /// 6-digit verification code
    #[validate(length(equal = 6), custom = "validate_numeric_code")]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOtpResponse {
    pub message: String,
    pub expires_in_minutes: i64,
}

fn validate_numeric_code(code: &str) -> Result<(), ValidationError> {
    if code.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("numeric"))
    }
}
