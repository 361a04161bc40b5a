//! Integration tests for the verification gate wired to infrastructure senders

use std::sync::Arc;
use std::time::Duration;

use ed_core::services::verification::{
    DeliveryConfig, VerificationGate, VerificationGateConfig,
};
use ed_core::VerificationFailure;
use ed_infra::cache::InMemoryVerificationStore;
use ed_infra::sms::{HttpSmsGateway, MockSmsService, SmsNotificationSender};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PHONE: &str = "+923001234567";

fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("ed_infra=debug,ed_core=debug")
        .with_test_writer()
        .try_init();
}

fn extract_code(message: &str) -> String {
    let start = message.find("is: ").expect("code marker") + 4;
    message[start..start + 6].to_string()
}

#[tokio::test]
async fn test_mock_sms_round_trip() {
    init_test_logging();
    let sms = MockSmsService::with_options(false, false);
    let gate = VerificationGate::new(
        Arc::new(SmsNotificationSender::new(sms.clone())),
        Arc::new(InMemoryVerificationStore::new()),
        VerificationGateConfig::default(),
    );

    let issued = gate.issue(PHONE, &DeliveryConfig::default()).await;
    assert!(issued.success, "{}", issued.message);

    let message = sms.last_message_to(PHONE).expect("message delivered");
    assert!(message.contains("resetting all data for the school"));

    let verified = gate.verify(&extract_code(&message)).await;
    assert!(verified.success);
}

#[tokio::test]
async fn test_gateway_rejection_rolls_back() {
    init_test_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/send"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let store = Arc::new(InMemoryVerificationStore::new());
    let gate = VerificationGate::new(
        Arc::new(HttpSmsGateway::new(Duration::from_secs(5), DeliveryConfig::default()).unwrap()),
        store.clone(),
        VerificationGateConfig::default(),
    );
    let config = DeliveryConfig::default().with_endpoint(format!("{}/send", server.uri()));

    let issued = gate.issue(PHONE, &config).await;

    assert!(!issued.success);
    assert!(matches!(
        issued.failure,
        Some(VerificationFailure::DeliveryFailure { .. })
    ));
    assert!(!store.is_occupied().await);
}

#[tokio::test]
async fn test_gateway_delivery_makes_code_live() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/send"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(InMemoryVerificationStore::new());
    let gate = VerificationGate::new(
        Arc::new(HttpSmsGateway::new(Duration::from_secs(5), DeliveryConfig::default()).unwrap()),
        store.clone(),
        VerificationGateConfig::default(),
    );
    let config = DeliveryConfig::default().with_endpoint(format!("{}/send", server.uri()));

    let issued = gate.issue(PHONE, &config).await;

    assert!(issued.success);
    assert!(store.is_occupied().await);
}
