//! Domain entities representing core business objects.

pub mod purge_summary;
pub mod verification_record;


pub use purge_summary::{PurgeSummary, SCHOOL_COLLECTIONS};
pub use verification_record::{
    VerificationRecord, CODE_LENGTH, CODE_MAX, CODE_MIN, DEFAULT_EXPIRATION_MINUTES,
};
