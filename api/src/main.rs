use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;

use ed_api::app::create_app;
use ed_api::routes::reset::AppState;
use ed_api::telemetry::init_tracing;
use ed_core::repositories::InMemorySchoolDataRepository;
use ed_core::services::reset::FactoryResetService;
use ed_core::services::verification::{
    VerificationGate, VerificationGateConfig, VerificationStoreTrait,
};
use ed_infra::cache::{InMemoryVerificationStore, RedisClient, RedisVerificationStore};
use ed_infra::sms::{create_notification_sender, delivery_config_from};
use ed_shared::{AppConfig, OtpStoreKind};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging)?;

    info!(
        environment = %config.environment,
        sms_provider = %config.sms.provider,
        otp_store = ?config.otp.store,
        "Starting EduDesk API Server"
    );

    let gate_config = VerificationGateConfig::from(&config.otp);

    let store: Box<dyn VerificationStoreTrait> = match config.otp.store {
        OtpStoreKind::Memory => Box::new(InMemoryVerificationStore::new()),
        OtpStoreKind::Redis => {
            let client = RedisClient::new(config.cache.clone())
                .await
                .context("failed to connect to Redis for the verification store")?;
            Box::new(RedisVerificationStore::new(client, gate_config.expiry_window()))
        }
    };

    let sender = create_notification_sender(&config.sms)
        .context("failed to create the notification sender")?;

    let gate = Arc::new(VerificationGate::new(
        Arc::new(sender),
        Arc::new(store),
        gate_config.clone(),
    ));

    // The hosted school database is wired outside this service
    let repository = Arc::new(InMemorySchoolDataRepository::new());

    let app_state = web::Data::new(AppState {
        reset_service: Arc::new(FactoryResetService::new(gate, repository)),
        delivery_config: delivery_config_from(&config.sms),
        expiration_minutes: gate_config.expiration_minutes(),
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server terminated with an error")
}
