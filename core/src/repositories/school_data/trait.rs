//! Repository trait for the school's administrative records.

use async_trait::async_trait;

use crate::domain::entities::purge_summary::PurgeSummary;
use crate::errors::DomainError;

/// Repository trait over the school's record collections
///
/// Only the destructive operation guarded by the one-time code is modelled
/// here; everyday CRUD lives with the dashboards.
#[async_trait]
pub trait SchoolDataRepository: Send + Sync {
    /// Delete every record in every school collection
    ///
    /// # Returns
    /// * `Ok(PurgeSummary)` with per-collection deletion counts
    /// * `Err(DomainError)` if the backing store rejects the purge
    async fn purge_all(&self) -> Result<PurgeSummary, DomainError>;
}
