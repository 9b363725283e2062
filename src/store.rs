// Session-scoped key-value store backing the booking flow. Values are
// UTF-8 JSON blobs under fixed string keys; last write wins, no expiry,
// no versioning.

use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

// Persisted state keys.
pub const KEY_IS_LOGGED_IN: &str = "isLoggedIn";
pub const KEY_USER: &str = "user";
pub const KEY_REQUESTS: &str = "accommodationRequests";
pub const KEY_PAYMENTS: &str = "payments";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to encode value for key '{key}': {source}")]
    Encode {
        key: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Default)]
struct StoreStats {
    reads: AtomicUsize,
    writes: AtomicUsize,
    parse_failures: AtomicUsize,
}

#[derive(Debug, Default, Clone)]
pub struct StoreStatsReport {
    pub reads: usize,
    pub writes: usize,
    pub parse_failures: usize,
}

#[derive(Debug, Default)]
pub struct SessionStore {
    entries: DashMap<String, String>,
    stats: StoreStats,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.stats.reads.fetch_add(1, Ordering::SeqCst);
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    pub fn set(&self, key: &str, value: String) {
        self.stats.writes.fetch_add(1, Ordering::SeqCst);
        self.entries.insert(key.to_string(), value);
    }

    pub fn remove(&self, key: &str) {
        self.entries.remove(key);
    }

    // Read a JSON value, falling back to the type's default when the key is
    // absent. Unparsable stored JSON also reads as the default: the store
    // fails closed rather than surfacing a corrupt blob.
    pub fn get_json<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        match self.get(key) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(err) => {
                    self.stats.parse_failures.fetch_add(1, Ordering::SeqCst);
                    warn!(key, %err, "malformed stored JSON, treating as empty");
                    T::default()
                }
            },
            None => T::default(),
        }
    }

    pub fn set_json<T>(&self, key: &str, value: &T) -> Result<(), StoreError>
    where
        T: Serialize,
    {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.set(key, raw);
        Ok(())
    }

    pub fn stats(&self) -> StoreStatsReport {
        StoreStatsReport {
            reads: self.stats.reads.load(Ordering::SeqCst),
            writes: self.stats.writes.load(Ordering::SeqCst),
            parse_failures: self.stats.parse_failures.load(Ordering::SeqCst),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_key_reads_as_default() {
        let store = SessionStore::new();
        let requests: Vec<String> = store.get_json(KEY_REQUESTS);
        assert!(requests.is_empty());
        assert!(store.get(KEY_USER).is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let store = SessionStore::new();
        store.set(KEY_IS_LOGGED_IN, "true".to_string());
        store.set(KEY_IS_LOGGED_IN, "false".to_string());
        assert_eq!(store.get(KEY_IS_LOGGED_IN).as_deref(), Some("false"));
    }

    #[test]
    fn test_malformed_json_fails_closed() {
        let store = SessionStore::new();
        store.set(KEY_PAYMENTS, "{not json".to_string());

        let payments: Vec<String> = store.get_json(KEY_PAYMENTS);
        assert!(payments.is_empty());
        assert_eq!(store.stats().parse_failures, 1);
    }

    #[test]
    fn test_json_round_trip() {
        let store = SessionStore::new();
        store
            .set_json(KEY_REQUESTS, &vec!["a".to_string(), "b".to_string()])
            .unwrap();

        let values: Vec<String> = store.get_json(KEY_REQUESTS);
        assert_eq!(values, vec!["a", "b"]);
    }

    #[test]
    fn test_stats_count_reads_and_writes() {
        let store = SessionStore::new();
        store.set(KEY_USER, "{}".to_string());
        store.get(KEY_USER);
        store.get(KEY_USER);

        let stats = store.stats();
        assert_eq!(stats.writes, 1);
        assert_eq!(stats.reads, 2);
    }
}
