use std::collections::BTreeMap;

use async_trait::async_trait;
use tracing::debug;

use super::domain::{Item, UpdateResult};
use super::repository::ItemStore;
use crate::storage::memory_map_store::MemoryMapStore;

/// Process-local item store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct InMemoryItemStore {
    store: MemoryMapStore<String, Item>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.store.len().await
    }

    pub async fn is_empty(&self) -> bool {
        self.store.is_empty().await
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn list_all(&self) -> BTreeMap<String, Item> {
        self.store.snapshot().await
    }

    async fn get(&self, title: &str) -> Option<Item> {
        self.store.get(&title.to_string()).await
    }

    async fn create(&self, title: &str, description: String) -> Item {
        let item = Item::new(title, description);
        let previous = self.store.insert(title.to_string(), item.clone()).await;
        debug!(%title, overwrote = previous.is_some(), "item created");
        item
    }

    async fn replace(&self, title: &str, item: Item) -> UpdateResult {
        let old = self
            .store
            .insert(title.to_string(), item.clone())
            .await
            .unwrap_or_default();
        debug!(%title, complete = item.complete, "item replaced");
        UpdateResult { old, new: item }
    }

    async fn delete(&self, title: &str) -> Option<Item> {
        let removed = self.store.remove(&title.to_string()).await;
        debug!(%title, found = removed.is_some(), "item delete");
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn create_twice_is_idempotent() {
        let store = InMemoryItemStore::new();
        let first = store.create("milk", "buy milk".into()).await;
        let second = store.create("milk", "buy milk".into()).await;
        assert_eq!(first, second);
        assert_eq!(store.get("milk").await, Some(Item::new("milk", "buy milk")));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn create_overwrites_completed_item() {
        let store = InMemoryItemStore::new();
        store
            .replace("milk", Item { title: "milk".into(), description: "old".into(), complete: true })
            .await;
        let created = store.create("milk", "new".into()).await;
        assert!(!created.complete);
        assert_eq!(store.get("milk").await, Some(created));
    }

    #[tokio::test]
    async fn replace_upserts_and_reports_previous() {
        let store = InMemoryItemStore::new();
        let item = Item { title: "milk".into(), description: "buy milk".into(), complete: true };

        // absent key: old is the default item
        let res = store.replace("milk", item.clone()).await;
        assert_eq!(res.old, Item::default());
        assert_eq!(res.new, item);
        assert_eq!(store.get("milk").await, Some(item.clone()));

        let again = Item { complete: false, ..item.clone() };
        let res = store.replace("milk", again.clone()).await;
        assert_eq!(res.old, item);
        assert_eq!(store.get("milk").await, Some(again));
    }

    #[tokio::test]
    async fn replace_keeps_path_key_even_if_body_title_differs() {
        let store = InMemoryItemStore::new();
        store.replace("a", Item::new("b", "x")).await;
        assert_eq!(store.get("a").await.map(|i| i.title), Some("b".to_string()));
        assert_eq!(store.get("b").await, None);
    }

    #[tokio::test]
    async fn delete_removes_once() {
        let store = InMemoryItemStore::new();
        store.create("milk", "buy milk".into()).await;
        assert_eq!(store.delete("milk").await, Some(Item::new("milk", "buy milk")));
        assert_eq!(store.get("milk").await, None);
        assert_eq!(store.delete("milk").await, None);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn get_and_list_never_create() {
        let store = InMemoryItemStore::new();
        assert_eq!(store.get("ghost").await, None);
        assert!(store.list_all().await.is_empty());
        assert!(store.is_empty().await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_lose_nothing() {
        let store = Arc::new(InMemoryItemStore::new());
        let n = 200;
        let mut handles = Vec::with_capacity(n);
        for i in 0..n {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.create(&format!("item-{i}"), format!("desc {i}")).await
            }));
        }
        for h in handles {
            h.await.expect("join");
        }
        let all = store.list_all().await;
        assert_eq!(all.len(), n);
        assert_eq!(all["item-7"], Item::new("item-7", "desc 7"));
    }
}
