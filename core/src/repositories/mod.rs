pub mod school_data;

pub use school_data::{InMemorySchoolDataRepository, SchoolDataRepository};
