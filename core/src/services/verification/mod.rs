//! One-time code gate for destructive administrative actions
//!
//! This module provides the single-slot verification workflow:
//! - Code generation and delivery through a pluggable sender
//! - Rollback of undelivered codes
//! - Lazy expiry and single-use consumption on verify
//! - A storage-agnostic slot so the record can live in memory or a shared store

mod config;
mod service;
mod traits;
mod types;

#[cfg(test)]
pub(crate) mod tests;

pub use config::VerificationGateConfig;
pub use service::VerificationGate;
pub use traits::{NotificationSenderTrait, VerificationStoreTrait};
pub use types::{DeliveryConfig, IssueCodeResult, VerifyCodeResult};
