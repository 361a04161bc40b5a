//! Factory reset route handlers
//!
//! - `POST /api/v1/reset/send-otp` sends the confirmation code
//! - `POST /api/v1/reset/confirm` checks the code and wipes the school data

pub mod confirm;
pub mod send_otp;

use std::sync::Arc;

use ed_core::repositories::SchoolDataRepository;
use ed_core::services::reset::FactoryResetService;
use ed_core::services::verification::{
    DeliveryConfig, NotificationSenderTrait, VerificationStoreTrait,
};

pub use confirm::confirm_reset;
pub use send_otp::send_otp;

/// Application state that holds shared services
pub struct AppState<S, V, R>
where
    S: NotificationSenderTrait,
    V: VerificationStoreTrait,
    R: SchoolDataRepository,
{
    pub reset_service: Arc<FactoryResetService<S, V, R>>,
    /// Channel settings handed to the sender on every issue
    pub delivery_config: DeliveryConfig,
    /// Minutes an issued code stays valid, echoed to clients
    pub expiration_minutes: i64,
}
