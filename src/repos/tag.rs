//! Repository for the `tags` collection.
//!
//! Slug uniqueness is a cross-document rule and therefore checked by the
//! orchestrator against its cached list before `create` is called; the store
//! itself offers no uniqueness constraint.

use std::sync::Arc;

use serde_json::json;

use crate::error::AdminError;
use crate::models::Tag;
use crate::slug::is_valid_slug;
use crate::store::{DocumentStore, OrderBy};

const COLLECTION: &str = "tags";

pub struct TagRepo {
    store: Arc<dyn DocumentStore>,
}

impl TagRepo {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// All tags, alphabetical.
    pub async fn list(&self) -> Result<Vec<Tag>, AdminError> {
        let docs = self.store.list(COLLECTION, OrderBy::asc("name")).await?;
        Ok(docs.iter().map(Tag::from_document).collect())
    }

    pub async fn create(&self, name: &str, slug: &str) -> Result<String, AdminError> {
        if name.trim().is_empty() {
            return Err(AdminError::Validation("Tag name is required".to_string()));
        }
        if !is_valid_slug(slug) {
            return Err(AdminError::Validation(
                "Tag name must contain letters or numbers".to_string(),
            ));
        }

        let id = self
            .store
            .insert(COLLECTION, json!({ "name": name.trim(), "slug": slug }))
            .await?;
        tracing::info!("Tag created: {} ({})", slug, id);
        Ok(id)
    }

    /// Deleting a tag does not cascade: blog posts keep the orphaned id in
    /// their tag sets and renderers skip ids with no matching tag.
    pub async fn delete(&self, id: &str) -> Result<(), AdminError> {
        self.store.delete(COLLECTION, id).await?;
        tracing::info!("Tag deleted: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn list_is_alphabetical() {
        let store = Arc::new(MemoryStore::new());
        let repo = TagRepo::new(store);
        repo.create("Venues", "venues").await.unwrap();
        repo.create("Beach Wedding", "beach-wedding").await.unwrap();

        let tags = repo.list().await.unwrap();
        assert_eq!(tags[0].name, "Beach Wedding");
        assert_eq!(tags[1].name, "Venues");
    }

    #[tokio::test]
    async fn create_rejects_empty_slug() {
        let store = Arc::new(MemoryStore::new());
        let repo = TagRepo::new(store.clone());
        let err = repo.create("!!!", "").await.unwrap_err();
        assert_matches!(err, AdminError::Validation(_));
        assert_eq!(store.count("tags").await, 0);
    }
}
