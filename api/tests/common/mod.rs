//! Shared fixtures for route tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use chrono::{TimeZone, Utc};

use ed_api::routes::reset::AppState;
use ed_core::repositories::InMemorySchoolDataRepository;
use ed_core::services::clock::ManualClock;
use ed_core::services::reset::FactoryResetService;
use ed_core::services::verification::{DeliveryConfig, VerificationGate, VerificationGateConfig};
use ed_infra::cache::InMemoryVerificationStore;
use ed_infra::sms::{MockSmsService, SmsNotificationSender};

pub const PHONE: &str = "+923001234567";

pub type TestSender = SmsNotificationSender<MockSmsService>;
pub type TestState = AppState<TestSender, InMemoryVerificationStore, InMemorySchoolDataRepository>;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub sms: MockSmsService,
    pub clock: Arc<ManualClock>,
    pub repository: Arc<InMemorySchoolDataRepository>,
}

impl TestContext {
    /// Code carried by the last message sent to `PHONE`
    pub fn last_code(&self) -> String {
        let message = self.sms.last_message_to(PHONE).expect("no message sent");
        let start = message.find("is: ").expect("code marker") + 4;
        message[start..start + 6].to_string()
    }
}

pub async fn create_test_context() -> TestContext {
    let sms = MockSmsService::with_options(false, false);
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2026, 9, 1, 7, 45, 0).unwrap(),
    ));
    let gate = Arc::new(VerificationGate::with_clock(
        Arc::new(SmsNotificationSender::new(sms.clone())),
        Arc::new(InMemoryVerificationStore::new()),
        VerificationGateConfig {
            code_expiration_minutes: 5,
            reset_context: "Green Valley School".to_string(),
        },
        clock.clone(),
    ));

    let repository = Arc::new(InMemorySchoolDataRepository::new());
    repository.seed("students", 320).await;
    repository.seed("families", 210).await;
    repository.seed("fees", 1500).await;

    let state = web::Data::new(AppState {
        reset_service: Arc::new(FactoryResetService::new(gate, repository.clone())),
        delivery_config: DeliveryConfig::default(),
        expiration_minutes: 5,
    });

    TestContext {
        state,
        sms,
        clock,
        repository,
    }
}
