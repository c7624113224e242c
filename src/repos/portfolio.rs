//! Repository for the `portfolioItems` collection.

use std::sync::Arc;

use serde_json::json;

use crate::error::AdminError;
use crate::models::{PortfolioCategory, PortfolioItem};
use crate::store::{DocumentStore, OrderBy};

const COLLECTION: &str = "portfolioItems";

/// The full writable field set. Portfolio writes always carry every field,
/// on create and update alike.
#[derive(Debug, Clone)]
pub struct PortfolioFields {
    pub image: String,
    pub title: String,
    pub couple: String,
    pub location: String,
    pub guests: String,
    pub date: String,
    pub category: PortfolioCategory,
    pub description: String,
    pub highlights: Vec<String>,
}

impl PortfolioFields {
    /// Blank highlight entries never reach the store. An all-blank list
    /// persists as an empty sequence, not an omitted field.
    fn persisted_highlights(&self) -> Vec<String> {
        self.highlights
            .iter()
            .map(|h| h.trim())
            .filter(|h| !h.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn to_fields(&self) -> serde_json::Value {
        json!({
            "image": self.image,
            "title": self.title,
            "couple": self.couple,
            "location": self.location,
            "guests": self.guests,
            "date": self.date,
            "category": self.category.as_str(),
            "description": self.description,
            "highlights": self.persisted_highlights(),
        })
    }
}

pub struct PortfolioRepo {
    store: Arc<dyn DocumentStore>,
}

impl PortfolioRepo {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// All items, newest first by their free-text date field.
    pub async fn list(&self) -> Result<Vec<PortfolioItem>, AdminError> {
        let docs = self.store.list(COLLECTION, OrderBy::desc("date")).await?;
        Ok(docs.iter().map(PortfolioItem::from_document).collect())
    }

    pub async fn create(&self, fields: PortfolioFields) -> Result<String, AdminError> {
        if fields.image.trim().is_empty() {
            return Err(AdminError::Validation("Image is required".to_string()));
        }
        let id = self.store.insert(COLLECTION, fields.to_fields()).await?;
        tracing::info!("Portfolio item created: {}", id);
        Ok(id)
    }

    pub async fn update(&self, id: &str, fields: PortfolioFields) -> Result<(), AdminError> {
        self.store.update(COLLECTION, id, fields.to_fields()).await?;
        tracing::info!("Portfolio item updated: {}", id);
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), AdminError> {
        self.store.delete(COLLECTION, id).await?;
        tracing::info!("Portfolio item deleted: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use assert_matches::assert_matches;

    fn fields(highlights: &[&str]) -> PortfolioFields {
        PortfolioFields {
            image: "https://img/venue.jpg".to_string(),
            title: "Lakeside Wedding".to_string(),
            couple: "A & B".to_string(),
            location: "Udaipur".to_string(),
            guests: "150+".to_string(),
            date: "March 2024".to_string(),
            category: PortfolioCategory::Wedding,
            description: "Three-day celebration".to_string(),
            highlights: highlights.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn blank_highlights_are_dropped_before_persisting() {
        let store = Arc::new(MemoryStore::new());
        let repo = PortfolioRepo::new(store);
        repo.create(fields(&["First", "", "  ", "Second"]))
            .await
            .unwrap();

        let items = repo.list().await.unwrap();
        assert_eq!(items[0].highlights, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn all_blank_highlights_persist_as_empty_sequence() {
        let store = Arc::new(MemoryStore::new());
        let repo = PortfolioRepo::new(store);
        repo.create(fields(&["", "   "])).await.unwrap();

        let items = repo.list().await.unwrap();
        assert!(items[0].highlights.is_empty());
    }

    #[tokio::test]
    async fn create_requires_an_image() {
        let store = Arc::new(MemoryStore::new());
        let repo = PortfolioRepo::new(store.clone());
        let mut f = fields(&["x"]);
        f.image = String::new();
        let err = repo.create(f).await.unwrap_err();
        assert_matches!(err, AdminError::Validation(_));
        assert_eq!(store.count("portfolioItems").await, 0);
    }
}
