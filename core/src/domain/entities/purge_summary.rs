//! Result of wiping the school's records during a factory reset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Record collections removed by a factory reset
pub const SCHOOL_COLLECTIONS: &[&str] = &[
    "students",
    "families",
    "fees",
    "attendance",
    "teachers",
    "classes",
    "marks",
    "timetables",
];

/// Per-collection deletion counts for one factory reset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurgeSummary {
    /// Number of records deleted, keyed by collection name
    pub collections: BTreeMap<String, u64>,

    /// When the purge completed
    pub purged_at: DateTime<Utc>,
}

impl PurgeSummary {
    pub fn new(collections: BTreeMap<String, u64>, purged_at: DateTime<Utc>) -> Self {
        Self {
            collections,
            purged_at,
        }
    }

    /// Total number of records deleted across all collections
    pub fn total(&self) -> u64 {
        self.collections.values().sum()
    }
}
