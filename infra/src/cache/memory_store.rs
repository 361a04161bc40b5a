//! In-process verification slot

use async_trait::async_trait;
use tokio::sync::RwLock;

use ed_core::domain::entities::verification_record::VerificationRecord;
use ed_core::services::verification::VerificationStoreTrait;

/// Verification slot held in process memory
///
/// The default store for a single-instance deployment. The record is lost on
/// restart, which only forces the administrator to request a new code.
#[derive(Default)]
pub struct InMemoryVerificationStore {
    slot: RwLock<Option<VerificationRecord>>,
}

impl InMemoryVerificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a record is currently held, expired or not
    pub async fn is_occupied(&self) -> bool {
        self.slot.read().await.is_some()
    }
}

#[async_trait]
impl VerificationStoreTrait for InMemoryVerificationStore {
    async fn get(&self) -> Result<Option<VerificationRecord>, String> {
        Ok(self.slot.read().await.clone())
    }

    async fn set(&self, record: &VerificationRecord) -> Result<(), String> {
        *self.slot.write().await = Some(record.clone());
        Ok(())
    }

    async fn delete(&self) -> Result<(), String> {
        *self.slot.write().await = None;
        Ok(())
    }
}
