//! Time-based cache for upstream response bodies.
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;

/// Upstream responses are reused for one hour.
pub const DEFAULT_TTL_SECS: i64 = 3600;
const MAX_ENTRIES: usize = 1_000;

#[derive(Debug)]
pub struct ResponseCache {
    ttl_secs: i64,
    entries: Mutex<HashMap<String, CachedBody>>,
}

#[derive(Debug, Clone)]
struct CachedBody {
    stored_at: i64,
    body: String,
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL_SECS)
    }
}

impl ResponseCache {
    pub fn new(ttl_secs: i64) -> Self {
        Self {
            ttl_secs,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        self.get_at(key, Utc::now().timestamp()).await
    }

    pub async fn insert(&self, key: &str, body: String) {
        self.insert_at(key, body, Utc::now().timestamp()).await
    }

    async fn get_at(&self, key: &str, now: i64) -> Option<String> {
        let guard = self.entries.lock().await;
        let entry = guard.get(key)?;
        if now - entry.stored_at >= self.ttl_secs {
            return None;
        }
        debug!("Cache hit for {}", key);
        Some(entry.body.clone())
    }

    async fn insert_at(&self, key: &str, body: String, now: i64) {
        let mut guard = self.entries.lock().await;
        if guard.len() >= MAX_ENTRIES {
            let ttl = self.ttl_secs;
            guard.retain(|_, v| now - v.stored_at < ttl);
            if guard.len() >= MAX_ENTRIES {
                guard.clear();
            }
        }
        guard.insert(
            key.to_string(),
            CachedBody {
                stored_at: now,
                body,
            },
        );
    }
}
