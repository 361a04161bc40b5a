//! Cache module for the verification slot
//!
//! This module provides the Redis client and the two implementations of the
//! core `VerificationStoreTrait`: an in-process slot and a Redis-backed slot
//! shared between server instances.

pub mod memory_store;
pub mod redis_client;
pub mod verification_store;


pub use memory_store::InMemoryVerificationStore;
pub use redis_client::RedisClient;
pub use verification_store::RedisVerificationStore;

// Re-export commonly used types
pub use ed_shared::config::CacheConfig;
