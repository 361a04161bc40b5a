//! Verification record entity for the factory-reset one-time password.

use chrono::{DateTime, Duration, Utc};
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Smallest code the generator produces (first six-digit number)
pub const CODE_MIN: u32 = 100_000;

/// Largest code the generator produces
pub const CODE_MAX: u32 = 999_999;

/// Default expiration time for verification codes (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// The single outstanding one-time code and when it was issued
///
/// At most one record exists at a time; the gate owns the slot that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// The 6-digit shared secret
    pub code: String,

    /// Timestamp when the code was generated
    pub issued_at: DateTime<Utc>,
}

impl VerificationRecord {
    /// Creates a record from an existing code
    pub fn new(code: impl Into<String>, issued_at: DateTime<Utc>) -> Self {
        Self {
            code: code.into(),
            issued_at,
        }
    }

    /// Creates a record with a freshly generated code
    pub fn issue(issued_at: DateTime<Utc>) -> Self {
        Self::new(Self::generate_code(), issued_at)
    }

    /// Generates a uniformly random code in `CODE_MIN..=CODE_MAX`
    ///
    /// Uses the OS-provided CSPRNG. The lower bound guarantees six digits
    /// without any padding.
    pub fn generate_code() -> String {
        OsRng.gen_range(CODE_MIN..=CODE_MAX).to_string()
    }

    /// Time elapsed since the code was issued
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.issued_at
    }

    /// Checks whether the record is past its expiry window
    ///
    /// A record whose age equals the window is still accepted; only a
    /// strictly greater age expires it.
    pub fn is_expired(&self, now: DateTime<Utc>, window: Duration) -> bool {
        self.age(now) > window
    }

    /// When the record stops being accepted
    ///
    /// Saturates at the latest representable instant instead of overflowing.
    pub fn expires_at(&self, window: Duration) -> DateTime<Utc> {
        self.issued_at
            .checked_add_signed(window)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}
