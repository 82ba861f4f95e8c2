use std::{
    collections::{BTreeMap, HashMap},
    hash::Hash,
    sync::Arc,
};
use tokio::sync::RwLock;

/// Generic in-memory key-value map guarded by a single readers-writer lock.
///
/// Reads share the lock, every mutation takes it exclusively. Values are cloned
/// out so callers never hold a reference into the map.
#[derive(Debug)]
pub struct MemoryMapStore<K, V> {
    inner: Arc<RwLock<HashMap<K, V>>>,
}

impl<K, V> Clone for MemoryMapStore<K, V> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<K, V> Default for MemoryMapStore<K, V> {
    fn default() -> Self {
        Self { inner: Arc::new(RwLock::new(HashMap::new())) }
    }
}

impl<K, V> MemoryMapStore<K, V>
where
    K: Eq + Hash + Ord + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every entry, ordered by key.
    pub async fn snapshot(&self) -> BTreeMap<K, V> {
        let map = self.inner.read().await;
        map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Get value by key.
    pub async fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    /// Insert or overwrite; returns the previous value if there was one.
    pub async fn insert(&self, key: K, value: V) -> Option<V> {
        let mut map = self.inner.write().await;
        map.insert(key, value)
    }

    /// Remove a key; returns the removed value if it existed.
    pub async fn remove(&self, key: &K) -> Option<V> {
        let mut map = self.inner.write().await;
        map.remove(key)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
