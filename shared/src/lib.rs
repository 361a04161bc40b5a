//! Shared utilities and common types for the EduDesk server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Utility functions (phone validation and masking)
//! - API response wrappers

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, Environment, LogFormat, LoggingConfig, OtpConfig, OtpStoreKind,
    ServerConfig, SmsConfig,
};
pub use types::{ApiResponse, HealthResponse};
pub use utils::phone;
