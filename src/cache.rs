use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::error::Error;

/// Key/value store for computed responses. Values are JSON so one store can
/// hold every response type; entries disappear once their TTL has elapsed.
#[async_trait]
pub trait Cache {
    async fn get(&self, key: &str) -> Result<Option<Value>, Error>;
    async fn set(&self, key: &str, value: Value, ttl: Duration) -> Result<(), Error>;
}

pub type DynCache = Arc<dyn Cache + Send + Sync>;

/// Reads and decodes a cached value. Cache failures and undecodable entries
/// are logged and reported as a miss.
pub async fn get_json<T: DeserializeOwned>(cache: &DynCache, key: &str) -> Option<T> {
    let value = match cache.get(key).await {
        Ok(value) => value?,
        Err(err) => {
            tracing::error!("cache read failed for {}: {}", key, err);
            return None;
        }
    };

    match serde_json::from_value(value) {
        Ok(decoded) => Some(decoded),
        Err(err) => {
            tracing::warn!("discarding undecodable cache entry {}: {}", key, err);
            None
        }
    }
}

/// Encodes and stores a value. Failures are logged; a lost write only costs a
/// future miss.
pub async fn set_json<T: Serialize>(cache: &DynCache, key: &str, value: &T, ttl: Duration) {
    let encoded = match serde_json::to_value(value) {
        Ok(encoded) => encoded,
        Err(err) => {
            tracing::error!("failed to encode cache entry {}: {}", key, err);
            return;
        }
    };

    if let Err(err) = cache.set(key, encoded, ttl).await {
        tracing::error!("cache write failed for {}: {}", key, err);
    }
}

#[derive(Clone, Debug)]
struct Entry {
    value: Value,
    expires_at: Instant,
}

/// Process-local cache. Expired entries are invisible to `get` and are
/// reclaimed by [`MemoryCache::spawn_purge`].
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Entry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Drops every expired entry and returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();

        entries.retain(|_, entry| entry.expires_at > now);

        before - entries.len()
    }

    /// Starts a background task purging expired entries every `interval`.
    /// The task runs until aborted or the runtime shuts down.
    pub fn spawn_purge(self: Arc<Self>, interval: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);

            loop {
                ticker.tick().await;

                let purged = self.purge_expired().await;
                if purged > 0 {
                    tracing::debug!("purged {} expired cache entries", purged);
                }
            }
        })
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Value>, Error> {
        let entries = self.entries.read().await;

        Ok(entries
            .get(key)
            .filter(|entry| entry.expires_at > Instant::now())
            .map(|entry| entry.value.clone()))
    }

    async fn set(&self, key: &str, value: Value, ttl: Duration) -> Result<(), Error> {
        let entry = Entry {
            value,
            expires_at: Instant::now() + ttl,
        };

        self.entries.write().await.insert(key.to_string(), entry);

        Ok(())
    }
}
