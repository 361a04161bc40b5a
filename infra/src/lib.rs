//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the EduDesk backend,
//! following Clean Architecture principles. It provides concrete
//! implementations of the collaborators the core verification gate depends on.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Cache**: Redis client plus in-memory and Redis-backed verification slots
//! - **SMS**: SMS service integrations (mock, HTTP gateway) and the adapter to
//!   the core notification sender trait

// Re-export core types for convenience
pub use ed_core::errors::*;

/// Cache module - Redis client and verification record stores
pub mod cache;

/// SMS service module - Message delivery providers
pub mod sms;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Record (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),
}
