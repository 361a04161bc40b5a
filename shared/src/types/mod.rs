//! Type definitions shared by the HTTP layer

pub mod response;

pub use response::{ApiResponse, HealthResponse};
