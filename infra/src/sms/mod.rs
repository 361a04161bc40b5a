//! SMS Service Module
//!
//! This module provides SMS delivery for the factory reset code. It includes
//! an HTTP gateway for production and a mock implementation for development.
//!
//! ## Features
//!
//! - **SMS Service Trait**: Common interface for all SMS providers
//! - **Mock Implementation**: Console output for development
//! - **HTTP Gateway**: JSON POST to a configurable messaging endpoint
//! - **Core Adapter**: Bridges any provider to the core notification sender
//! - **Security**: Phone number masking in logs

pub mod http_gateway;
pub mod mock_sms;
pub mod notification_adapter;
pub mod sms_service;

pub use http_gateway::{delivery_config_from, DispatchOutcome, HttpSmsGateway};
pub use mock_sms::MockSmsService;
pub use notification_adapter::SmsNotificationSender;
pub use sms_service::{is_valid_phone_number, mask_phone_number, SmsService};

use ed_core::services::verification::NotificationSenderTrait;
use ed_shared::config::SmsConfig;

use crate::InfrastructureError;

#[cfg(test)]
mod tests;

/// Create the notification sender selected by `config.provider`
///
/// * `mock` - console output, no network
/// * `http` - HTTP gateway; requires an endpoint
///
/// Unknown providers are rejected with a configuration error.
pub fn create_notification_sender(
    config: &SmsConfig,
) -> Result<Box<dyn NotificationSenderTrait>, InfrastructureError> {
    match config.provider.as_str() {
        "mock" => {
            tracing::warn!("Using mock SMS service; codes are printed to the console");
            Ok(Box::new(SmsNotificationSender::new(MockSmsService::new())))
        }
        "http" => Ok(Box::new(HttpSmsGateway::from_config(config)?)),
        other => Err(InfrastructureError::Config(format!(
            "Unknown SMS provider '{}', expected 'mock' or 'http'",
            other
        ))),
    }
}
