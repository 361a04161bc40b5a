//! Adapter from infrastructure SMS services to the core sender trait

use async_trait::async_trait;
use tracing::warn;

use ed_core::services::verification::{DeliveryConfig, NotificationSenderTrait};

use super::sms_service::{mask_phone_number, SmsService};
use crate::InfrastructureError;

/// Adapter that implements the core `NotificationSenderTrait` for any `SmsService`
///
/// Provider refusals become `Ok(false)`; transport and configuration errors
/// are passed up as faults. The delivery config is ignored since the wrapped
/// service carries its own settings.
pub struct SmsNotificationSender<S: SmsService> {
    inner: S,
}

impl<S: SmsService> SmsNotificationSender<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// The wrapped SMS service
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: SmsService> NotificationSenderTrait for SmsNotificationSender<S> {
    async fn send(
        &self,
        destination: &str,
        message: &str,
        _config: &DeliveryConfig,
    ) -> Result<bool, String> {
        match self.inner.send_sms(destination, message).await {
            Ok(_) => Ok(true),
            Err(InfrastructureError::Sms(reason)) => {
                warn!(
                    provider = self.inner.provider_name(),
                    phone = %mask_phone_number(destination),
                    error = %reason,
                    "SMS not sent"
                );
                Ok(false)
            }
            Err(e) => Err(e.to_string()),
        }
    }
}
