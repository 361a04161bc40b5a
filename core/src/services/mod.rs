//! Business services containing domain logic and use cases.

pub mod clock;
pub mod reset;
pub mod verification;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use reset::{FactoryResetService, ResetOutcome};
pub use verification::{
    DeliveryConfig, IssueCodeResult, NotificationSenderTrait, VerificationGate,
    VerificationGateConfig, VerificationStoreTrait, VerifyCodeResult,
};
