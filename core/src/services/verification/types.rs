//! Types for verification gate inputs and results

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::VerificationFailure;

/// Channel-specific delivery settings
///
/// The gate never inspects these; they are handed to the sender as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryConfig {
    /// Gateway endpoint URL
    #[serde(default)]
    pub endpoint: Option<String>,
    /// API token or other credential
    #[serde(default, skip_serializing)]
    pub credential: Option<String>,
    /// Sender id or from number
    #[serde(default)]
    pub sender_id: Option<String>,
    /// Extra routing parameters forwarded to the gateway
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

impl DeliveryConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// Result of issuing a verification code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueCodeResult {
    /// Whether the code was delivered and is now live
    pub success: bool,
    /// Message suitable for showing to the user
    pub message: String,
    /// Why issuance failed, if it did
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<VerificationFailure>,
}

impl IssueCodeResult {
    pub fn sent(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            failure: None,
        }
    }

    pub fn failed(failure: VerificationFailure) -> Self {
        Self {
            success: false,
            message: failure.to_string(),
            failure: Some(failure),
        }
    }
}

/// Result of verifying a code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyCodeResult {
    /// Whether the code was accepted (and consumed)
    pub success: bool,
    /// Message suitable for showing to the user
    pub message: String,
    /// Why verification failed, if it did
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<VerificationFailure>,
}

impl VerifyCodeResult {
    pub fn verified() -> Self {
        Self {
            success: true,
            message: "OTP verified successfully.".to_string(),
            failure: None,
        }
    }

    pub fn failed(failure: VerificationFailure) -> Self {
        Self {
            success: false,
            message: failure.to_string(),
            failure: Some(failure),
        }
    }
}
