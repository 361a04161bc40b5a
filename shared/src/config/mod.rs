//! Configuration module with business-specific sub-modules
//!
//! - `cache` - Redis configuration for the shared verification store
//! - `environment` - Environment detection and logging configuration
//! - `otp` - One-time password lifetime, message context and store selection
//! - `server` - HTTP server configuration
//! - `sms` - Notification channel settings

pub mod cache;
pub mod environment;
pub mod otp;
pub mod server;
pub mod sms;

use serde::{Deserialize, Serialize};

pub use cache::CacheConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use otp::{OtpConfig, OtpStoreKind, MAX_EXPIRATION_MINUTES};
pub use server::ServerConfig;
pub use sms::SmsConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Redis configuration (used when the OTP store is `redis`)
    pub cache: CacheConfig,

    /// OTP configuration
    pub otp: OtpConfig,

    /// Notification channel configuration
    pub sms: SmsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            cache: CacheConfig::default(),
            otp: OtpConfig::default(),
            sms: SmsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Every section falls back to its defaults when a variable is absent, and
    /// the logging section is derived from the detected environment unless
    /// `LOG_LEVEL` / `LOG_FORMAT` override it.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            cache: CacheConfig::from_env(),
            otp: OtpConfig::from_env(),
            sms: SmsConfig::from_env(),
            logging: LoggingConfig::for_environment(environment).with_env_overrides(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.otp.expiration_minutes, 5);
        assert_eq!(config.sms.provider, "mock");
        assert_eq!(config.logging.level, "debug");
    }
}
