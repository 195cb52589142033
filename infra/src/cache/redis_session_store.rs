//! Redis-backed session store

use async_trait::async_trait;

use morph_core::domain::entities::session::SessionRecord;
use morph_core::services::otp::SessionStore;
use morph_shared::config::{CacheConfig, SessionConfig};

use super::redis_client::RedisClient;
use super::session_key;
use crate::InfrastructureError;

/// Stores session records as JSON with a fixed TTL
pub struct RedisSessionStore {
    client: RedisClient,
    cache_config: CacheConfig,
    ttl_seconds: u64,
}

impl RedisSessionStore {
    pub fn new(client: RedisClient, cache_config: CacheConfig, session_config: &SessionConfig) -> Self {
        Self {
            client,
            cache_config,
            ttl_seconds: session_config.ttl_seconds,
        }
    }

    /// Connect and build the store in one step
    pub async fn connect(
        cache_config: CacheConfig,
        session_config: &SessionConfig,
    ) -> Result<Self, InfrastructureError> {
        let client = RedisClient::new(&cache_config).await?;
        Ok(Self::new(client, cache_config, session_config))
    }

    fn key(&self, session_id: &str) -> String {
        self.cache_config.prefixed(&session_key(session_id))
    }

    async fn read(&self, session_id: &str) -> Result<Option<SessionRecord>, InfrastructureError> {
        match self.client.get(&self.key(session_id)).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn write(&self, record: &SessionRecord) -> Result<(), InfrastructureError> {
        let payload = serde_json::to_string(record)?;
        self.client
            .set_with_expiry(&self.key(&record.session_id), &payload, self.ttl_seconds)
            .await
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn load(&self, session_id: &str) -> Result<Option<SessionRecord>, String> {
        self.read(session_id).await.map_err(|e| e.to_string())
    }

    async fn save(&self, record: &SessionRecord) -> Result<(), String> {
        self.write(record).await.map_err(|e| e.to_string())
    }

    async fn remove(&self, session_id: &str) -> Result<(), String> {
        self.client
            .delete(&self.key(session_id))
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}
