//! Key-value storage seam
//!
//! The page keeps two small stores: a durable one for the language
//! preference and a session-scoped one for the feedback dismissal flag.
//! Hosts bring their own backends; the in-memory one ships for tests and
//! embedding without persistence.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Trait for page key-value backends
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get a stored value by key
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a value
    async fn remove(&self, key: &str) -> Result<()>;

    /// Get storage backend name
    fn name(&self) -> &'static str;
}

/// In-memory store
///
/// Values live in a HashMap and vanish when the store is dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the store holds nothing
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let store = MemoryStore::new();
        store.set("preferredLanguage", "de").await.unwrap();

        assert_eq!(store.get("preferredLanguage").await.unwrap().as_deref(), Some("de"));
        assert_eq!(store.get("missing").await.unwrap(), None);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("key", "first").await.unwrap();
        store.set("key", "second").await.unwrap();

        assert_eq!(store.get("key").await.unwrap().as_deref(), Some("second"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_remove() {
        let store = MemoryStore::new();
        store.set("key", "value").await.unwrap();
        store.remove("key").await.unwrap();

        assert_eq!(store.get("key").await.unwrap(), None);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let alias = store.clone();
        alias.set("key", "value").await.unwrap();

        assert_eq!(store.get("key").await.unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn test_backend_name() {
        assert_eq!(MemoryStore::new().name(), "memory");
    }
}
