use std::collections::BTreeMap;

use async_trait::async_trait;

use super::domain::{Item, UpdateResult};

/// Store contract the resource handlers are written against.
///
/// Every operation is keyed by a non-empty title. Create and replace are
/// upserts: neither fails on an existing or missing key.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Snapshot of every item, ordered by title.
    async fn list_all(&self) -> BTreeMap<String, Item>;
    async fn get(&self, title: &str) -> Option<Item>;
    /// Store `{title, description, complete: false}`, overwriting any existing entry.
    async fn create(&self, title: &str, description: String) -> Item;
    /// Store `item` under `title` and hand back what was there before
    /// (`Item::default()` when nothing was).
    async fn replace(&self, title: &str, item: Item) -> UpdateResult;
    async fn delete(&self, title: &str) -> Option<Item>;
}
