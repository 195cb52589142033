//! Session stores for the OTP flow
//!
//! Session records are written as JSON under `session:{id}` with a TTL that
//! is independent of the OTP's own expiry. Redis backs production; the
//! in-memory store serves development and tests.

pub mod memory_session_store;
pub mod redis_client;
pub mod redis_session_store;

#[cfg(test)]
mod tests;

pub use memory_session_store::MemorySessionStore;
pub use redis_client::RedisClient;
pub use redis_session_store::RedisSessionStore;

// Re-export commonly used types
pub use morph_shared::config::CacheConfig;

/// Store key for a session id, before any configured prefix
pub fn session_key(session_id: &str) -> String {
    format!("session:{}", session_id)
}
