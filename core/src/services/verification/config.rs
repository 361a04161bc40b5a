//! Configuration for the verification gate

use chrono::Duration;
use ed_shared::config::{OtpConfig, MAX_EXPIRATION_MINUTES};

use crate::domain::entities::verification_record::DEFAULT_EXPIRATION_MINUTES;

/// Configuration for the verification gate
#[derive(Debug, Clone)]
pub struct VerificationGateConfig {
    /// Number of minutes before a verification code expires
    pub code_expiration_minutes: i64,
    /// What is being reset, as named in the outgoing message
    pub reset_context: String,
}

impl VerificationGateConfig {
    /// Expiration minutes clamped to `1..=MAX_EXPIRATION_MINUTES`
    pub fn expiration_minutes(&self) -> i64 {
        self.code_expiration_minutes.clamp(1, MAX_EXPIRATION_MINUTES)
    }

    /// Expiry window as a duration
    pub fn expiry_window(&self) -> Duration {
        Duration::minutes(self.expiration_minutes())
    }
}

impl Default for VerificationGateConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
            reset_context: "the school".to_string(),
        }
    }
}

impl From<&OtpConfig> for VerificationGateConfig {
    fn from(config: &OtpConfig) -> Self {
        Self {
            code_expiration_minutes: config.expiration_minutes,
            reset_context: config.reset_context.clone(),
        }
    }
}
