//! Repository for the `brochures` collection.
//!
//! The single-featured rule spans the whole collection, so it lives in the
//! orchestrator's check against the cached list; this repository only owns
//! per-document shape and defaulting.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::error::AdminError;
use crate::models::{Brochure, BrochureCategory, BrochureType};
use crate::store::{DocumentStore, OrderBy};

const COLLECTION: &str = "brochures";

#[derive(Debug, Clone)]
pub struct NewBrochure {
    pub title: String,
    pub description: String,
    pub brochure_type: BrochureType,
    pub category: BrochureCategory,
    pub featured: bool,
    pub download_url: String,
    pub preview_url: Option<String>,
}

pub struct BrochureRepo {
    store: Arc<dyn DocumentStore>,
}

impl BrochureRepo {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// All brochures, newest first.
    pub async fn list(&self) -> Result<Vec<Brochure>, AdminError> {
        let docs = self
            .store
            .list(COLLECTION, OrderBy::desc("createdAt"))
            .await?;
        Ok(docs.iter().map(Brochure::from_document).collect())
    }

    pub async fn create(&self, new: NewBrochure) -> Result<String, AdminError> {
        if new.title.trim().is_empty() {
            return Err(AdminError::Validation("Title is required".to_string()));
        }
        if new.download_url.trim().is_empty() {
            return Err(AdminError::Validation(
                "Download URL is required".to_string(),
            ));
        }

        // No size is ever computed; the field is persisted empty. PDFs get a
        // page-count placeholder of 0.
        let mut fields = json!({
            "title": new.title.trim(),
            "description": new.description.trim(),
            "type": new.brochure_type.as_str(),
            "size": "",
            "downloadUrl": new.download_url.trim(),
            "category": new.category.as_str(),
            "featured": new.featured,
            "createdAt": Utc::now().to_rfc3339(),
        });
        if let Some(url) = new.preview_url {
            fields["previewUrl"] = json!(url);
        }
        if new.brochure_type == BrochureType::Pdf {
            fields["pages"] = json!(0);
        }

        let id = self.store.insert(COLLECTION, fields).await?;
        tracing::info!("Brochure created: {}", id);
        Ok(id)
    }

    pub async fn set_featured(&self, id: &str, featured: bool) -> Result<(), AdminError> {
        self.store
            .update(COLLECTION, id, json!({ "featured": featured }))
            .await?;
        tracing::info!("Brochure {} featured={}", id, featured);
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), AdminError> {
        self.store.delete(COLLECTION, id).await?;
        tracing::info!("Brochure deleted: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn new_brochure(brochure_type: BrochureType) -> NewBrochure {
        NewBrochure {
            title: "Planning Guide".to_string(),
            description: "Everything to book first".to_string(),
            brochure_type,
            category: BrochureCategory::Planning,
            featured: false,
            download_url: "https://drive.example/file".to_string(),
            preview_url: None,
        }
    }

    #[tokio::test]
    async fn pdf_gets_pages_placeholder_and_empty_size() {
        let store = Arc::new(MemoryStore::new());
        let repo = BrochureRepo::new(store);
        repo.create(new_brochure(BrochureType::Pdf)).await.unwrap();

        let brochures = repo.list().await.unwrap();
        assert_eq!(brochures[0].pages, Some(0));
        assert_eq!(brochures[0].size, "");
        assert!(!brochures[0].created_at.is_empty());
    }

    #[tokio::test]
    async fn non_pdf_has_no_pages_field() {
        let store = Arc::new(MemoryStore::new());
        let repo = BrochureRepo::new(store);
        repo.create(new_brochure(BrochureType::Video)).await.unwrap();

        let brochures = repo.list().await.unwrap();
        assert_eq!(brochures[0].pages, None);
    }

    #[tokio::test]
    async fn set_featured_flips_only_that_flag() {
        let store = Arc::new(MemoryStore::new());
        let repo = BrochureRepo::new(store);
        let id = repo.create(new_brochure(BrochureType::Pdf)).await.unwrap();

        repo.set_featured(&id, true).await.unwrap();
        let brochures = repo.list().await.unwrap();
        assert!(brochures[0].featured);
        assert_eq!(brochures[0].title, "Planning Guide");
    }
}
