//! Verification gate implementation

use chrono::Duration;
use constant_time_eq::constant_time_eq;
use std::sync::Arc;
use tokio::sync::Mutex;

use ed_shared::phone::mask_phone_number;

use crate::domain::entities::verification_record::VerificationRecord;
use crate::errors::VerificationFailure;
use crate::services::clock::{Clock, SystemClock};

use super::config::VerificationGateConfig;
use super::traits::{NotificationSenderTrait, VerificationStoreTrait};
use super::types::{DeliveryConfig, IssueCodeResult, VerifyCodeResult};

/// Issues and validates the single outstanding one-time code
///
/// The gate is the only component that touches the verification slot. Every
/// `issue` and `verify` runs under one lock, including the delivery await in
/// `issue`, so a verify always observes the latest completed issue and an
/// older code can never be accepted once a newer one was stored.
pub struct VerificationGate<S: NotificationSenderTrait, V: VerificationStoreTrait> {
    /// Delivery channel for the generated code
    sender: Arc<S>,
    /// Single-slot record storage
    store: Arc<V>,
    /// Time source for issuance and expiry
    clock: Arc<dyn Clock>,
    /// Gate configuration
    config: VerificationGateConfig,
    /// Serializes all slot access
    slot_lock: Mutex<()>,
}

impl<S: NotificationSenderTrait, V: VerificationStoreTrait> VerificationGate<S, V> {
    /// Create a new gate using the system clock
    pub fn new(sender: Arc<S>, store: Arc<V>, config: VerificationGateConfig) -> Self {
        Self::with_clock(sender, store, config, Arc::new(SystemClock))
    }

    /// Create a new gate with an explicit time source
    pub fn with_clock(
        sender: Arc<S>,
        store: Arc<V>,
        config: VerificationGateConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            sender,
            store,
            clock,
            config,
            slot_lock: Mutex::new(()),
        }
    }

    /// Issue a new code and deliver it to `destination`
    ///
    /// This method:
    /// 1. Generates a fresh 6-digit code
    /// 2. Stores it, replacing any earlier code
    /// 3. Sends the OTP message through the notification sender
    /// 4. Clears the slot again if delivery fails, so an undelivered code is never valid
    ///
    /// Never returns an error: every failure is reported as `DeliveryFailure`
    /// inside the result.
    pub async fn issue(&self, destination: &str, delivery_config: &DeliveryConfig) -> IssueCodeResult {
        let _guard = self.slot_lock.lock().await;
        let masked = mask_phone_number(destination);

        let record = VerificationRecord::issue(self.clock.now());

        if let Err(e) = self.store.set(&record).await {
            tracing::error!(
                destination = %masked,
                error = %e,
                event = "otp_storage_failed",
                "Failed to store verification code"
            );
            // An older code may still sit in the slot; it must not outlive this issue
            self.clear_slot("issue_store_failed").await;
            return IssueCodeResult::failed(VerificationFailure::delivery(
                "the verification code could not be stored",
            ));
        }

        tracing::info!(
            destination = %masked,
            event = "otp_generated",
            expires_at = %record.expires_at(self.expiry_window()),
            "Generated new factory reset verification code"
        );

        let message = self.compose_message(&record.code);

        let failure = match self.sender.send(destination, &message, delivery_config).await {
            Ok(true) => None,
            Ok(false) => Some(VerificationFailure::delivery(
                "the messaging service did not accept the message",
            )),
            Err(e) => Some(VerificationFailure::delivery(e)),
        };

        match failure {
            None => {
                tracing::info!(
                    destination = %masked,
                    event = "otp_sent",
                    "Verification code delivered"
                );
                IssueCodeResult::sent(format!(
                    "An OTP has been sent to {}. It will expire in {} minutes.",
                    masked, self.config.expiration_minutes()
                ))
            }
            Some(failure) => {
                tracing::warn!(
                    destination = %masked,
                    error = %failure,
                    event = "otp_delivery_failed",
                    "Verification code delivery failed, rolling back"
                );
                self.clear_slot("delivery_rollback").await;
                IssueCodeResult::failed(failure)
            }
        }
    }

    /// Verify a submitted code
    ///
    /// Checks, in order: a code exists, it has not expired, it matches. An
    /// expired code is discarded; a matching code is consumed; a wrong code
    /// leaves the live record untouched.
    ///
    /// The caller is responsible for rejecting input that is not exactly six
    /// characters before calling this.
    pub async fn verify(&self, submitted_code: &str) -> VerifyCodeResult {
        let _guard = self.slot_lock.lock().await;

        let record = match self.store.get().await {
            Ok(Some(record)) => record,
            Ok(None) => {
                tracing::warn!(event = "otp_verify_no_active_code", "No active verification code");
                return VerifyCodeResult::failed(VerificationFailure::NoActiveCode);
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    event = "otp_store_unavailable",
                    "Failed to read verification code"
                );
                return VerifyCodeResult::failed(VerificationFailure::delivery(
                    "verification store unavailable",
                ));
            }
        };

        let now = self.clock.now();
        if record.is_expired(now, self.expiry_window()) {
            tracing::warn!(
                event = "otp_expired",
                age_seconds = record.age(now).num_seconds(),
                "Verification code expired"
            );
            self.clear_slot("expired").await;
            return VerifyCodeResult::failed(VerificationFailure::CodeExpired);
        }

        if !Self::constant_time_compare(&record.code, submitted_code) {
            // Unlimited retries within the window; there is no attempt counter
            tracing::warn!(event = "otp_mismatch", "Invalid verification code submitted");
            return VerifyCodeResult::failed(VerificationFailure::CodeMismatch);
        }

        if let Err(e) = self.store.delete().await {
            // Reporting success without consuming would let the code be replayed
            tracing::error!(
                error = %e,
                event = "otp_consume_failed",
                "Failed to consume verification code"
            );
            return VerifyCodeResult::failed(VerificationFailure::delivery(
                "verification store unavailable",
            ));
        }

        tracing::info!(event = "otp_verified_success", "Verification code verified and consumed");
        VerifyCodeResult::verified()
    }

    /// Build the message delivered with a code
    pub fn compose_message(&self, code: &str) -> String {
        format!(
            "Your one-time password (OTP) for resetting all data for {} is: {}. \
             This code will expire in {} minutes. DO NOT share this code.",
            self.config.reset_context, code, self.config.expiration_minutes()
        )
    }

    /// How long an issued code stays valid
    pub fn expiry_window(&self) -> Duration {
        self.config.expiry_window()
    }

    /// Gate configuration
    pub fn config(&self) -> &VerificationGateConfig {
        &self.config
    }

    async fn clear_slot(&self, reason: &'static str) {
        if let Err(e) = self.store.delete().await {
            tracing::error!(
                error = %e,
                reason = reason,
                event = "otp_clear_failed",
                "Failed to clear verification slot"
            );
        }
    }

    fn constant_time_compare(stored: &str, submitted: &str) -> bool {
        if stored.len() != submitted.len() {
            return false;
        }
        constant_time_eq(stored.as_bytes(), submitted.as_bytes())
    }
}
