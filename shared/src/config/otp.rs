//! OTP configuration module

use serde::{Deserialize, Serialize};

/// Longest accepted expiry window (one day)
pub const MAX_EXPIRATION_MINUTES: i64 = 1440;

/// Where the single outstanding verification record is kept
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpStoreKind {
    /// Process-local slot; codes do not survive a restart
    #[default]
    Memory,
    /// Shared Redis key, for multi-instance deployments
    Redis,
}

impl std::str::FromStr for OtpStoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "in-memory" => Ok(OtpStoreKind::Memory),
            "redis" => Ok(OtpStoreKind::Redis),
            _ => Err(format!("Invalid OTP store: {}", s)),
        }
    }
}

/// One-time password settings for the factory-reset gate
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Minutes before an issued code expires
    pub expiration_minutes: i64,

    /// Name substituted into the OTP message ("resetting all data for ...")
    pub reset_context: String,

    /// Backing store for the verification slot
    #[serde(default)]
    pub store: OtpStoreKind,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            expiration_minutes: 5,
            reset_context: String::from("the school"),
            store: OtpStoreKind::Memory,
        }
    }
}

impl OtpConfig {
    /// Create from `OTP_EXPIRATION_MINUTES`, `OTP_RESET_CONTEXT` and `OTP_STORE`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            expiration_minutes: std::env::var("OTP_EXPIRATION_MINUTES")
                .ok()
                .and_then(|v| parse_expiration_minutes(&v))
                .unwrap_or(defaults.expiration_minutes),
            reset_context: std::env::var("OTP_RESET_CONTEXT")
                .ok()
                .filter(|context| !context.trim().is_empty())
                .unwrap_or(defaults.reset_context),
            store: std::env::var("OTP_STORE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.store),
        }
    }
}

/// Parse an expiry window in minutes, rejecting values outside `1..=MAX_EXPIRATION_MINUTES`
pub fn parse_expiration_minutes(value: &str) -> Option<i64> {
    value
        .trim()
        .parse()
        .ok()
        .filter(|minutes| (1..=MAX_EXPIRATION_MINUTES).contains(minutes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_config_default() {
        let config = OtpConfig::default();
        assert_eq!(config.expiration_minutes, 5);
        assert_eq!(config.reset_context, "the school");
        assert_eq!(config.store, OtpStoreKind::Memory);
    }

    #[test]
    fn test_store_kind_from_str() {
        assert_eq!("redis".parse::<OtpStoreKind>().unwrap(), OtpStoreKind::Redis);
        assert_eq!("In-Memory".parse::<OtpStoreKind>().unwrap(), OtpStoreKind::Memory);
        assert!("sqlite".parse::<OtpStoreKind>().is_err());
    }

    #[test]
    fn test_expiration_minutes_bounds() {
        assert_eq!(parse_expiration_minutes("10"), Some(10));
        assert_eq!(parse_expiration_minutes(" 1440 "), Some(MAX_EXPIRATION_MINUTES));
        assert_eq!(parse_expiration_minutes("0"), None);
        assert_eq!(parse_expiration_minutes("-5"), None);
        assert_eq!(parse_expiration_minutes("1441"), None);
        assert_eq!(parse_expiration_minutes("1000000000000"), None);
        assert_eq!(parse_expiration_minutes("9223372036854775807"), None);
        assert_eq!(parse_expiration_minutes("five"), None);
    }
}
