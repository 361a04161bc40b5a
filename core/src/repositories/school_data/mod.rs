//! School data repository module.

mod r#trait;
pub use r#trait::SchoolDataRepository;

mod memory;
pub use memory::InMemorySchoolDataRepository;
