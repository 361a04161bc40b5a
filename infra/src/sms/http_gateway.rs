//! HTTP Messaging Gateway
//!
//! Delivers messages by posting JSON to a generic SMS gateway endpoint:
//!
//! ```text
//! POST {endpoint}
//! Authorization: Bearer {credential}
//! {"to": "+923001234567", "message": "...", "sender_id": "EDUDESK", ...params}
//! ```
//!
//! Exactly one request is made per message. A non-2xx response is an ordinary
//! delivery failure; a transport error is a fault.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use ed_core::services::verification::{DeliveryConfig, NotificationSenderTrait};
use ed_shared::config::SmsConfig;

use super::sms_service::{is_valid_phone_number, mask_phone_number, SmsService};
use crate::InfrastructureError;

/// Longest message the gateway accepts
pub const MAX_MESSAGE_LENGTH: usize = 1600;

/// What the gateway did with a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Accepted, with the gateway's message id
    Accepted(String),
    /// Refused with a non-success status
    Rejected(StatusCode),
}

#[derive(Serialize)]
struct GatewayRequest<'a> {
    to: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sender_id: Option<&'a str>,
    #[serde(flatten)]
    params: &'a BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct GatewayResponse {
    #[serde(alias = "message_id", alias = "sid")]
    id: Option<String>,
}

/// SMS gateway reached over HTTP
pub struct HttpSmsGateway {
    client: Client,
    /// Delivery settings used by `SmsService::send_sms`
    defaults: DeliveryConfig,
}

impl HttpSmsGateway {
    /// Create a gateway with a per-request timeout
    pub fn new(request_timeout: Duration, defaults: DeliveryConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(InfrastructureError::Http)?;

        info!(
            endpoint = defaults.endpoint.as_deref().unwrap_or("<per-request>"),
            timeout_secs = request_timeout.as_secs(),
            "HTTP SMS gateway initialized"
        );

        Ok(Self { client, defaults })
    }

    /// Create a gateway from the SMS configuration
    pub fn from_config(config: &SmsConfig) -> Result<Self, InfrastructureError> {
        if config.endpoint.is_none() {
            return Err(InfrastructureError::Config(
                "SMS_ENDPOINT is required for the http SMS provider".to_string(),
            ));
        }
        Self::new(
            Duration::from_secs(config.request_timeout_secs),
            delivery_config_from(config),
        )
    }

    /// Post one message to the gateway
    pub async fn dispatch(
        &self,
        phone_number: &str,
        message: &str,
        config: &DeliveryConfig,
    ) -> Result<DispatchOutcome, InfrastructureError> {
        let endpoint = config.endpoint.as_deref().ok_or_else(|| {
            InfrastructureError::Config("No SMS gateway endpoint configured".to_string())
        })?;

        if !is_valid_phone_number(phone_number) {
            return Err(InfrastructureError::Sms(format!(
                "Invalid phone number format: {}",
                mask_phone_number(phone_number)
            )));
        }

        if message.len() > MAX_MESSAGE_LENGTH {
            return Err(InfrastructureError::Sms(format!(
                "Message exceeds maximum length of {} characters",
                MAX_MESSAGE_LENGTH
            )));
        }

        let body = GatewayRequest {
            to: phone_number,
            message,
            sender_id: config.sender_id.as_deref(),
            params: &config.params,
        };

        let mut request = self.client.post(endpoint).json(&body);
        if let Some(credential) = config.credential.as_deref() {
            request = request.bearer_auth(credential);
        }

        debug!(
            phone = %mask_phone_number(phone_number),
            message_length = message.len(),
            "Posting SMS to gateway"
        );

        let response = request.send().await.map_err(|e| {
            error!(phone = %mask_phone_number(phone_number), error = %e, "SMS gateway request failed");
            InfrastructureError::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                phone = %mask_phone_number(phone_number),
                status = status.as_u16(),
                "SMS gateway rejected message"
            );
            return Ok(DispatchOutcome::Rejected(status));
        }

        // The id is informational; a 2xx without one still counts as delivered
        let message_id = response
            .json::<GatewayResponse>()
            .await
            .ok()
            .and_then(|body| body.id)
            .unwrap_or_else(|| format!("http_{}", Uuid::new_v4()));

        info!(
            phone = %mask_phone_number(phone_number),
            message_id = %message_id,
            "SMS accepted by gateway"
        );

        Ok(DispatchOutcome::Accepted(message_id))
    }
}

#[async_trait]
impl SmsService for HttpSmsGateway {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        match self.dispatch(phone_number, message, &self.defaults).await? {
            DispatchOutcome::Accepted(id) => Ok(id),
            DispatchOutcome::Rejected(status) => Err(InfrastructureError::Sms(format!(
                "Gateway rejected message with status {}",
                status.as_u16()
            ))),
        }
    }

    fn provider_name(&self) -> &str {
        "HTTP"
    }
}

#[async_trait]
impl NotificationSenderTrait for HttpSmsGateway {
    async fn send(
        &self,
        destination: &str,
        message: &str,
        config: &DeliveryConfig,
    ) -> Result<bool, String> {
        match self.dispatch(destination, message, config).await {
            Ok(DispatchOutcome::Accepted(_)) => Ok(true),
            Ok(DispatchOutcome::Rejected(_)) => Ok(false),
            Err(InfrastructureError::Sms(reason)) => {
                warn!(error = %reason, "SMS not sent");
                Ok(false)
            }
            Err(e) => Err(e.to_string()),
        }
    }
}

/// Build the delivery settings handed to the sender from the SMS configuration
pub fn delivery_config_from(config: &SmsConfig) -> DeliveryConfig {
    DeliveryConfig {
        endpoint: config.endpoint.clone(),
        credential: config.api_token.clone(),
        sender_id: config.sender_id.clone(),
        params: BTreeMap::new(),
    }
}
