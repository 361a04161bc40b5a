//! Types for factory reset results

use serde::Serialize;

use crate::domain::entities::purge_summary::PurgeSummary;
use crate::errors::VerificationFailure;

/// Outcome of a reset confirmation attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResetOutcome {
    /// Whether the school data was wiped
    pub reset_performed: bool,
    /// Message suitable for showing to the user
    pub message: String,
    /// Why the code was rejected, if it was
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<VerificationFailure>,
    /// Deletion counts when the reset ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purged: Option<PurgeSummary>,
}

impl ResetOutcome {
    pub fn completed(purged: PurgeSummary) -> Self {
        Self {
            reset_performed: true,
            message: format!(
                "Factory reset completed. {} records were deleted.",
                purged.total()
            ),
            failure: None,
            purged: Some(purged),
        }
    }

    pub fn rejected(failure: VerificationFailure) -> Self {
        Self {
            reset_performed: false,
            message: failure.to_string(),
            failure: Some(failure),
            purged: None,
        }
    }
}
