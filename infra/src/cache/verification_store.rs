//! Redis-backed verification slot
//!
//! Stores the single verification record as JSON under one key so that every
//! server instance behind a load balancer sees the same slot. Key pattern:
//! `{prefix}:otp:factory_reset`.

use async_trait::async_trait;
use chrono::Duration;
use tracing::{debug, error};

use ed_core::domain::entities::verification_record::VerificationRecord;
use ed_core::services::verification::VerificationStoreTrait;

use crate::cache::RedisClient;
use crate::InfrastructureError;

/// Key suffix for the factory reset slot
pub const SLOT_KEY: &str = "otp:factory_reset";

/// Verification slot stored in Redis
///
/// The key carries a TTL of twice the expiry window so abandoned records do
/// not linger; expiry itself is still decided by the gate on read.
#[derive(Clone)]
pub struct RedisVerificationStore {
    redis_client: RedisClient,
    key: String,
    ttl_seconds: u64,
}

impl RedisVerificationStore {
    /// Create a store for a gate whose codes expire after `expiry_window`
    pub fn new(redis_client: RedisClient, expiry_window: Duration) -> Self {
        let key = redis_client.config().make_key(SLOT_KEY);
        Self {
            redis_client,
            key,
            ttl_seconds: safety_ttl_seconds(expiry_window),
        }
    }

    /// Full Redis key of the slot
    pub fn key(&self) -> &str {
        &self.key
    }

    /// TTL applied to the slot key
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    async fn read(&self) -> Result<Option<VerificationRecord>, InfrastructureError> {
        match self.redis_client.get(&self.key).await? {
            Some(raw) => Ok(Some(decode_record(&raw)?)),
            None => Ok(None),
        }
    }

    async fn write(&self, record: &VerificationRecord) -> Result<(), InfrastructureError> {
        let raw = encode_record(record)?;
        self.redis_client
            .set_with_expiry(&self.key, &raw, self.ttl_seconds)
            .await
    }
}

#[async_trait]
impl VerificationStoreTrait for RedisVerificationStore {
    async fn get(&self) -> Result<Option<VerificationRecord>, String> {
        self.read().await.map_err(|e| {
            error!(key = %self.key, error = %e, "Failed to read verification slot");
            e.to_string()
        })
    }

    async fn set(&self, record: &VerificationRecord) -> Result<(), String> {
        self.write(record).await.map_err(|e| {
            error!(key = %self.key, error = %e, "Failed to write verification slot");
            e.to_string()
        })?;
        debug!(key = %self.key, ttl = self.ttl_seconds, "Verification slot written");
        Ok(())
    }

    async fn delete(&self) -> Result<(), String> {
        self.redis_client
            .delete(&self.key)
            .await
            .map(|_| ())
            .map_err(|e| {
                error!(key = %self.key, error = %e, "Failed to clear verification slot");
                e.to_string()
            })
    }
}

/// Twice the expiry window, never less than one second
pub(crate) fn safety_ttl_seconds(expiry_window: Duration) -> u64 {
    (expiry_window.num_seconds().max(0) as u64 * 2).max(1)
}

pub(crate) fn encode_record(record: &VerificationRecord) -> Result<String, InfrastructureError> {
    Ok(serde_json::to_string(record)?)
}

pub(crate) fn decode_record(raw: &str) -> Result<VerificationRecord, InfrastructureError> {
    Ok(serde_json::from_str(raw)?)
}
