//! In-memory implementation of SchoolDataRepository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::domain::entities::purge_summary::{PurgeSummary, SCHOOL_COLLECTIONS};
use crate::errors::DomainError;

use super::SchoolDataRepository;

/// In-memory record counts per collection
///
/// Used for development wiring and tests, where no hosted document database
/// is available.
pub struct InMemorySchoolDataRepository {
    counts: RwLock<BTreeMap<String, u64>>,
    should_fail: AtomicBool,
}

impl InMemorySchoolDataRepository {
    /// Create a repository with every known collection empty
    pub fn new() -> Self {
        let counts = SCHOOL_COLLECTIONS
            .iter()
            .map(|name| (name.to_string(), 0))
            .collect();
        Self {
            counts: RwLock::new(counts),
            should_fail: AtomicBool::new(false),
        }
    }

    /// Set the number of records held in `collection`
    pub async fn seed(&self, collection: &str, count: u64) {
        self.counts.write().await.insert(collection.to_string(), count);
    }

    /// Current record counts
    pub async fn counts(&self) -> BTreeMap<String, u64> {
        self.counts.read().await.clone()
    }

    /// Total number of records across all collections
    pub async fn total_records(&self) -> u64 {
        self.counts.read().await.values().sum()
    }

    /// Set whether purges should fail
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }
}

impl Default for InMemorySchoolDataRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SchoolDataRepository for InMemorySchoolDataRepository {
    async fn purge_all(&self) -> Result<PurgeSummary, DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::ResetFailed {
                message: "In-memory repository configured to fail".to_string(),
            });
        }

        let mut counts = self.counts.write().await;
        let deleted = counts.clone();
        counts.values_mut().for_each(|count| *count = 0);

        Ok(PurgeSummary::new(deleted, Utc::now()))
    }
}
