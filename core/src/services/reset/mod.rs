//! Factory reset workflow guarded by the one-time code gate

mod service;
mod types;


pub use service::FactoryResetService;
pub use types::ResetOutcome;
