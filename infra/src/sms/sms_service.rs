//! SMS Service Interface
//!
//! Defines the trait for SMS providers that deliver text messages.

use async_trait::async_trait;

use crate::InfrastructureError;

pub use ed_shared::phone::mask_phone_number;
use ed_shared::phone::{is_valid_international_phone, normalize_phone_number};

/// SMS service trait for sending text messages
///
/// Implementations include:
/// - HTTP messaging gateway
/// - Mock implementation for development
#[async_trait]
pub trait SmsService: Send + Sync {
    /// Send an SMS message to a phone number
    ///
    /// # Arguments
    ///
    /// * `phone_number` - The recipient's phone number (E.164 format)
    /// * `message` - The message content to send
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Provider identifier for the sent message
    /// * `Err(InfrastructureError::Sms)` - If the provider refused the message
    /// * `Err(_)` - For transport or configuration faults
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError>;

    /// Get the service provider name
    fn provider_name(&self) -> &str;

    /// Check if the service is available
    ///
    /// Default implementation always returns true.
    async fn is_available(&self) -> bool {
        true
    }
}

/// Validate strict E.164 format
///
/// Unlike the shared validator, formatting characters are not tolerated here:
/// a provider must receive the number exactly as `+` followed by digits.
///
/// ```ignore
/// assert!(is_valid_phone_number("+923001234567"));
/// assert!(!is_valid_phone_number("+92 300 1234567"));
/// ```
pub fn is_valid_phone_number(phone: &str) -> bool {
    normalize_phone_number(phone) == phone && is_valid_international_phone(phone)
}
