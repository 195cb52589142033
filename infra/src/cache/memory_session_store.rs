//! In-process session store
//!
//! Entries expire after the configured TTL. An expired entry is dropped when
//! it is next loaded or on the next save of any session.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use morph_core::domain::entities::session::SessionRecord;
use morph_core::services::otp::SessionStore;
use morph_shared::config::SessionConfig;

#[derive(Clone)]
pub struct MemorySessionStore {
    entries: Arc<RwLock<HashMap<String, (SessionRecord, Instant)>>>,
    ttl: Duration,
}

impl MemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(Duration::from_secs(config.ttl_seconds))
    }

    /// Number of live entries
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .await
            .values()
            .filter(|(_, expires)| *expires > now)
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Entries held in the map, expired or not
    #[cfg(test)]
    pub(crate) async fn stored(&self) -> usize {
        self.entries.read().await.len()
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, session_id: &str) -> Result<Option<SessionRecord>, String> {
        let now = Instant::now();
        {
            let entries = self.entries.read().await;
            match entries.get(session_id) {
                Some((record, expires)) if *expires > now => return Ok(Some(record.clone())),
                Some(_) => {}
                None => return Ok(None),
            }
        }

        // a save may have replaced the entry since the read lock was released
        let mut entries = self.entries.write().await;
        if entries
            .get(session_id)
            .is_some_and(|(_, expires)| *expires <= now)
        {
            entries.remove(session_id);
        }
        Ok(None)
    }

    async fn save(&self, record: &SessionRecord) -> Result<(), String> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, (_, expires)| *expires > now);
        entries.insert(record.session_id.clone(), (record.clone(), now + self.ttl));
        Ok(())
    }

    async fn remove(&self, session_id: &str) -> Result<(), String> {
        self.entries.write().await.remove(session_id);
        Ok(())
    }
}
