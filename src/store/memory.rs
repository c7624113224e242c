//! In-process [`DocumentStore`] used by tests and local development.
//!
//! Mirrors the remote store's contract: generated string ids, ordered
//! listing, top-level merge updates, idempotent deletes. A fault-injection
//! switch lets callers exercise their `StoreUnavailable` handling.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Document, DocumentStore, OrderBy, SortOrder, StoreError};

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<(String, Value)>>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with [`StoreError::Unavailable`]
    /// until switched back.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }
        Ok(())
    }

    /// Number of documents currently held in a collection.
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map(|docs| docs.len())
            .unwrap_or(0)
    }
}

/// Render a field value for ordering. All fields the admin orders by are
/// RFC 3339 timestamps or names, so string comparison preserves their
/// natural order; missing fields sort as empty.
fn sort_key(fields: &Value, field: &str) -> String {
    match fields.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, collection: &str, fields: Value) -> Result<String, StoreError> {
        self.check_available()?;
        let id = Uuid::new_v4().to_string();
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push((id.clone(), fields));
        Ok(id)
    }

    async fn list(&self, collection: &str, order: OrderBy) -> Result<Vec<Document>, StoreError> {
        self.check_available()?;
        let collections = self.collections.read().await;
        let mut docs: Vec<Document> = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, fields)| Document {
                        id: id.clone(),
                        fields: fields.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        docs.sort_by(|a, b| {
            let ka = sort_key(&a.fields, &order.field);
            let kb = sort_key(&b.fields, &order.field);
            match order.order {
                SortOrder::Asc => ka.cmp(&kb),
                SortOrder::Desc => kb.cmp(&ka),
            }
        });

        Ok(docs)
    }

    async fn update(&self, collection: &str, id: &str, patch: Value) -> Result<(), StoreError> {
        self.check_available()?;
        let mut collections = self.collections.write().await;
        let docs = collections
            .get_mut(collection)
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;

        let entry = docs
            .iter_mut()
            .find(|(doc_id, _)| doc_id == id)
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;

        if let (Value::Object(existing), Value::Object(incoming)) = (&mut entry.1, patch) {
            for (key, value) in incoming {
                existing.insert(key, value);
            }
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        self.check_available()?;
        let mut collections = self.collections.write().await;
        if let Some(docs) = collections.get_mut(collection) {
            docs.retain(|(doc_id, _)| doc_id != id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[tokio::test]
    async fn insert_assigns_unique_ids() {
        let store = MemoryStore::new();
        let a = store.insert("tags", json!({"name": "a"})).await.unwrap();
        let b = store.insert("tags", json!({"name": "b"})).await.unwrap();
        assert_ne!(a, b);
        assert_eq!(store.count("tags").await, 2);
    }

    #[tokio::test]
    async fn list_orders_by_field() {
        let store = MemoryStore::new();
        store
            .insert("blogs", json!({"date": "2024-02-01T00:00:00Z"}))
            .await
            .unwrap();
        store
            .insert("blogs", json!({"date": "2024-03-01T00:00:00Z"}))
            .await
            .unwrap();

        let docs = store.list("blogs", OrderBy::desc("date")).await.unwrap();
        assert_eq!(docs[0].fields["date"], "2024-03-01T00:00:00Z");

        let docs = store.list("blogs", OrderBy::asc("date")).await.unwrap();
        assert_eq!(docs[0].fields["date"], "2024-02-01T00:00:00Z");
    }

    #[tokio::test]
    async fn update_merges_top_level_fields() {
        let store = MemoryStore::new();
        let id = store
            .insert("brochures", json!({"title": "Guide", "featured": false}))
            .await
            .unwrap();

        store
            .update("brochures", &id, json!({"featured": true}))
            .await
            .unwrap();

        let docs = store
            .list("brochures", OrderBy::desc("createdAt"))
            .await
            .unwrap();
        assert_eq!(docs[0].fields["title"], "Guide");
        assert_eq!(docs[0].fields["featured"], true);
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let store = MemoryStore::new();
        store.insert("tags", json!({"name": "a"})).await.unwrap();
        let err = store
            .update("tags", "missing", json!({"name": "b"}))
            .await
            .unwrap_err();
        assert_matches!(err, StoreError::NotFound { .. });
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = MemoryStore::new();
        let id = store.insert("tags", json!({"name": "a"})).await.unwrap();
        store.delete("tags", &id).await.unwrap();
        store.delete("tags", &id).await.unwrap();
        assert_eq!(store.count("tags").await, 0);
    }

    #[tokio::test]
    async fn fault_switch_makes_calls_fail() {
        let store = MemoryStore::new();
        store.set_unavailable(true);
        let err = store.list("tags", OrderBy::asc("name")).await.unwrap_err();
        assert_matches!(err, StoreError::Unavailable(_));

        store.set_unavailable(false);
        assert!(store.list("tags", OrderBy::asc("name")).await.is_ok());
    }
}
