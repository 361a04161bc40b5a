//! # EduDesk Core
//!
//! Core business logic and domain layer for the EduDesk backend.
//! This crate contains the verification record entity, the one-time code gate
//! guarding the factory reset, the reset workflow itself, repository
//! interfaces, and the error types shared by the outer layers.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
