//! Traits for notification delivery and verification record storage

use async_trait::async_trait;

use crate::domain::entities::verification_record::VerificationRecord;

use super::types::DeliveryConfig;

/// Trait for delivering the one-time code to its recipient
#[async_trait]
pub trait NotificationSenderTrait: Send + Sync {
    /// Send `message` to `destination` using the channel settings in `config`
    ///
    /// `Ok(true)` means the channel accepted the message, `Ok(false)` is an
    /// ordinary delivery failure, and `Err` is an unexpected fault. The gate
    /// makes exactly one attempt per issued code.
    async fn send(
        &self,
        destination: &str,
        message: &str,
        config: &DeliveryConfig,
    ) -> Result<bool, String>;
}

/// Trait for the single-slot verification record store
///
/// Holds at most one record; `set` unconditionally replaces whatever is there.
#[async_trait]
pub trait VerificationStoreTrait: Send + Sync {
    /// Read the current record, if any
    async fn get(&self) -> Result<Option<VerificationRecord>, String>;
    /// Replace the slot contents with `record`
    async fn set(&self, record: &VerificationRecord) -> Result<(), String>;
    /// Empty the slot
    async fn delete(&self) -> Result<(), String>;
}

#[async_trait]
impl<T: NotificationSenderTrait + ?Sized> NotificationSenderTrait for Box<T> {
    async fn send(
        &self,
        destination: &str,
        message: &str,
        config: &DeliveryConfig,
    ) -> Result<bool, String> {
        (**self).send(destination, message, config).await
    }
}

#[async_trait]
impl<T: VerificationStoreTrait + ?Sized> VerificationStoreTrait for Box<T> {
    async fn get(&self) -> Result<Option<VerificationRecord>, String> {
        (**self).get().await
    }

    async fn set(&self, record: &VerificationRecord) -> Result<(), String> {
        (**self).set(record).await
    }

    async fn delete(&self) -> Result<(), String> {
        (**self).delete().await
    }
}
