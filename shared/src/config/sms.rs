//! Notification channel configuration module

use serde::{Deserialize, Serialize};

/// SMS / messaging gateway configuration
///
/// The gateway fields are passed through to the sender untouched; only the
/// `provider` is interpreted when wiring the application.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    /// Provider name ("mock", "http")
    pub provider: String,

    /// Gateway endpoint URL (http provider)
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Gateway API token
    #[serde(default)]
    pub api_token: Option<String>,

    /// Sender id or from number
    #[serde(default)]
    pub sender_id: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            endpoint: None,
            api_token: None,
            sender_id: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl SmsConfig {
    /// Load SMS config from `SMS_PROVIDER`, `SMS_ENDPOINT`, `SMS_API_TOKEN`,
    /// `SMS_SENDER_ID` and `SMS_REQUEST_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        Self {
            provider: std::env::var("SMS_PROVIDER").unwrap_or_else(|_| "mock".to_string()),
            endpoint: std::env::var("SMS_ENDPOINT").ok(),
            api_token: std::env::var("SMS_API_TOKEN").ok(),
            sender_id: std::env::var("SMS_SENDER_ID").ok(),
            request_timeout_secs: std::env::var("SMS_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_request_timeout_secs),
        }
    }
}

fn default_request_timeout_secs() -> u64 {
    10
}
