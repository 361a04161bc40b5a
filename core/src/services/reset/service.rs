//! Factory reset service implementation

use std::sync::Arc;

use ed_shared::phone::{is_valid_international_phone, mask_phone_number};

use crate::domain::entities::verification_record::CODE_LENGTH;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::SchoolDataRepository;
use crate::services::verification::{
    DeliveryConfig, IssueCodeResult, NotificationSenderTrait, VerificationGate,
    VerificationStoreTrait,
};

use super::types::ResetOutcome;

/// Drives the "send code, confirm code, wipe data" workflow
///
/// The purge runs only after the gate accepts a code, and at most once per
/// accepted code since the gate consumes it.
pub struct FactoryResetService<S, V, R>
where
    S: NotificationSenderTrait,
    V: VerificationStoreTrait,
    R: SchoolDataRepository,
{
    gate: Arc<VerificationGate<S, V>>,
    repository: Arc<R>,
}

impl<S, V, R> FactoryResetService<S, V, R>
where
    S: NotificationSenderTrait,
    V: VerificationStoreTrait,
    R: SchoolDataRepository,
{
    pub fn new(gate: Arc<VerificationGate<S, V>>, repository: Arc<R>) -> Self {
        Self { gate, repository }
    }

    /// Send a reset code to the administrator's phone
    ///
    /// # Returns
    ///
    /// * `Ok(IssueCodeResult)` - Delivery outcome; a failed delivery is not an error
    /// * `Err(DomainError::Validation)` - If `destination` is not an E.164 number
    pub async fn request_reset(
        &self,
        destination: &str,
        delivery_config: &DeliveryConfig,
    ) -> DomainResult<IssueCodeResult> {
        if !is_valid_international_phone(destination) {
            tracing::warn!(
                destination = %mask_phone_number(destination),
                event = "reset_request_invalid_destination",
                "Rejected factory reset request with invalid phone number"
            );
            return Err(DomainError::Validation {
                message: "Phone number must be in international format, e.g. +923001234567"
                    .to_string(),
            });
        }

        tracing::info!(
            destination = %mask_phone_number(destination),
            event = "reset_requested",
            "Factory reset requested"
        );

        Ok(self.gate.issue(destination, delivery_config).await)
    }

    /// Confirm the reset with the code the administrator received
    ///
    /// # Returns
    ///
    /// * `Ok(ResetOutcome)` - `reset_performed` is true only when the code was accepted
    ///   and the purge succeeded
    /// * `Err(DomainError::Validation)` - If the code is not six digits
    /// * `Err(DomainError::ResetFailed)` - If the code was accepted but the purge failed
    pub async fn confirm_reset(&self, code: &str) -> DomainResult<ResetOutcome> {
        Self::validate_code_format(code)?;

        let verification = self.gate.verify(code).await;
        if let Some(failure) = verification.failure {
            return Ok(ResetOutcome::rejected(failure));
        }

        tracing::warn!(event = "factory_reset_started", "Wiping all school data");

        let purged = self.repository.purge_all().await.map_err(|e| {
            tracing::error!(error = %e, event = "factory_reset_failed", "Factory reset failed");
            match e {
                DomainError::ResetFailed { .. } => e,
                other => DomainError::ResetFailed {
                    message: other.to_string(),
                },
            }
        })?;

        tracing::warn!(
            event = "factory_reset_completed",
            records_deleted = purged.total(),
            "Factory reset completed"
        );

        Ok(ResetOutcome::completed(purged))
    }

    fn validate_code_format(code: &str) -> DomainResult<()> {
        if code.len() != CODE_LENGTH || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::Validation {
                message: format!("Code must be exactly {} digits", CODE_LENGTH),
            });
        }
        Ok(())
    }
}
