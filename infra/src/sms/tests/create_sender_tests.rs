//! Unit tests for notification sender creation

use ed_shared::config::SmsConfig;

use crate::sms::{create_notification_sender, delivery_config_from};
use crate::InfrastructureError;

#[test]
fn test_create_mock_sender() {
    let config = SmsConfig::default();
    assert!(create_notification_sender(&config).is_ok());
}

#[test]
fn test_create_http_sender_requires_endpoint() {
    let config = SmsConfig {
        provider: "http".to_string(),
        ..SmsConfig::default()
    };

    let result = create_notification_sender(&config);
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}

#[test]
fn test_create_http_sender_with_endpoint() {
    let config = SmsConfig {
        provider: "http".to_string(),
        endpoint: Some("https://sms.example.com/v1/messages".to_string()),
        ..SmsConfig::default()
    };

    assert!(create_notification_sender(&config).is_ok());
}

#[test]
fn test_unknown_provider_rejected() {
    let config = SmsConfig {
        provider: "carrier-pigeon".to_string(),
        ..SmsConfig::default()
    };

    let result = create_notification_sender(&config);
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}

#[test]
fn test_delivery_config_from_sms_config() {
    let config = SmsConfig {
        provider: "http".to_string(),
        endpoint: Some("https://sms.example.com/v1/messages".to_string()),
        api_token: Some("secret-token".to_string()),
        sender_id: Some("EDUDESK".to_string()),
        request_timeout_secs: 10,
    };

    let delivery = delivery_config_from(&config);
    assert_eq!(delivery.endpoint, config.endpoint);
    assert_eq!(delivery.credential.as_deref(), Some("secret-token"));
    assert_eq!(delivery.sender_id.as_deref(), Some("EDUDESK"));
    assert!(delivery.params.is_empty());
}
