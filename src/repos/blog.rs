//! Repository for the `blogs` collection.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::error::AdminError;
use crate::models::BlogPost;
use crate::store::{DocumentStore, OrderBy};

const COLLECTION: &str = "blogs";

/// Excerpt derivation length when the author supplies none.
const EXCERPT_CHARS: usize = 150;

/// Fields for a blog create. `slug` and `post_number` are assigned by the
/// orchestrator before the write; `date` and `published` are defaulted here.
#[derive(Debug, Clone)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub author: String,
    pub slug: String,
    pub post_number: u32,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
}

/// Fields for a blog update. `postNumber`, `date` and `slug` are never
/// touched on update; `image_url` is only written when a new upload replaced
/// the image.
#[derive(Debug, Clone)]
pub struct BlogPatch {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub author: String,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
}

fn derive_excerpt(excerpt: Option<&str>, content: &str) -> String {
    match excerpt.map(str::trim).filter(|e| !e.is_empty()) {
        Some(explicit) => explicit.to_string(),
        None => format!("{}...", content.chars().take(EXCERPT_CHARS).collect::<String>()),
    }
}

fn default_author(author: &str) -> String {
    let author = author.trim();
    if author.is_empty() {
        "Admin".to_string()
    } else {
        author.to_string()
    }
}

pub struct BlogRepo {
    store: Arc<dyn DocumentStore>,
}

impl BlogRepo {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// All posts, newest first.
    pub async fn list(&self) -> Result<Vec<BlogPost>, AdminError> {
        let docs = self.store.list(COLLECTION, OrderBy::desc("date")).await?;
        Ok(docs.iter().map(BlogPost::from_document).collect())
    }

    pub async fn create(&self, new: NewBlogPost) -> Result<String, AdminError> {
        if new.title.trim().is_empty() {
            return Err(AdminError::Validation("Title is required".to_string()));
        }
        if new.content.trim().is_empty() {
            return Err(AdminError::Validation("Content is required".to_string()));
        }

        let mut fields = json!({
            "title": new.title.trim(),
            "content": new.content.trim(),
            "excerpt": derive_excerpt(new.excerpt.as_deref(), new.content.trim()),
            "author": default_author(&new.author),
            "published": true,
            "slug": new.slug,
            "tags": new.tags,
            "postNumber": new.post_number,
            "date": Utc::now().to_rfc3339(),
        });
        if let Some(url) = new.image_url {
            fields["imageUrl"] = json!(url);
        }

        let id = self.store.insert(COLLECTION, fields).await?;
        tracing::info!("Blog post created: {}", id);
        Ok(id)
    }

    pub async fn update(&self, id: &str, patch: BlogPatch) -> Result<(), AdminError> {
        if patch.title.trim().is_empty() {
            return Err(AdminError::Validation("Title is required".to_string()));
        }
        if patch.content.trim().is_empty() {
            return Err(AdminError::Validation("Content is required".to_string()));
        }

        let mut fields = json!({
            "title": patch.title.trim(),
            "content": patch.content.trim(),
            "excerpt": derive_excerpt(patch.excerpt.as_deref(), patch.content.trim()),
            "author": default_author(&patch.author),
            "published": true,
            "tags": patch.tags,
        });
        if let Some(url) = patch.image_url {
            fields["imageUrl"] = json!(url);
        }

        self.store.update(COLLECTION, id, fields).await?;
        tracing::info!("Blog post updated: {}", id);
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), AdminError> {
        self.store.delete(COLLECTION, id).await?;
        tracing::info!("Blog post deleted: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use assert_matches::assert_matches;

    fn new_post(title: &str, content: &str) -> NewBlogPost {
        NewBlogPost {
            title: title.to_string(),
            content: content.to_string(),
            excerpt: None,
            author: String::new(),
            slug: crate::slug::slugify(title),
            post_number: 1,
            tags: vec![],
            image_url: None,
        }
    }

    #[tokio::test]
    async fn create_defaults_excerpt_author_published_and_date() {
        let store = Arc::new(MemoryStore::new());
        let repo = BlogRepo::new(store);
        let long_content = "x".repeat(300);
        repo.create(new_post("Udaipur Magic", &long_content))
            .await
            .unwrap();

        let posts = repo.list().await.unwrap();
        assert_eq!(posts.len(), 1);
        let post = &posts[0];
        assert_eq!(post.excerpt, format!("{}...", "x".repeat(150)));
        assert_eq!(post.author, "Admin");
        assert!(post.published);
        assert!(!post.date.is_empty());
        assert_eq!(post.slug, "udaipur-magic");
    }

    #[tokio::test]
    async fn explicit_excerpt_is_kept_verbatim() {
        let store = Arc::new(MemoryStore::new());
        let repo = BlogRepo::new(store);
        let mut new = new_post("T", "some content");
        new.excerpt = Some("hand-written summary".to_string());
        repo.create(new).await.unwrap();

        let posts = repo.list().await.unwrap();
        assert_eq!(posts[0].excerpt, "hand-written summary");
    }

    #[tokio::test]
    async fn create_rejects_blank_required_fields() {
        let store = Arc::new(MemoryStore::new());
        let repo = BlogRepo::new(store.clone());
        let err = repo.create(new_post("  ", "content")).await.unwrap_err();
        assert_matches!(err, AdminError::Validation(_));
        let err = repo.create(new_post("Title", "   ")).await.unwrap_err();
        assert_matches!(err, AdminError::Validation(_));
        assert_eq!(store.count("blogs").await, 0);
    }

    #[tokio::test]
    async fn update_leaves_post_number_date_and_slug_alone() {
        let store = Arc::new(MemoryStore::new());
        let repo = BlogRepo::new(store);
        let mut new = new_post("Original Title", "content");
        new.post_number = 4;
        let id = repo.create(new).await.unwrap();
        let before = repo.list().await.unwrap().remove(0);

        repo.update(
            &id,
            BlogPatch {
                title: "Renamed Title".to_string(),
                content: "new content".to_string(),
                excerpt: None,
                author: "Priya".to_string(),
                tags: vec!["t1".to_string()],
                image_url: None,
            },
        )
        .await
        .unwrap();

        let after = repo.list().await.unwrap().remove(0);
        assert_eq!(after.title, "Renamed Title");
        assert_eq!(after.author, "Priya");
        assert_eq!(after.post_number, 4);
        assert_eq!(after.date, before.date);
        assert_eq!(after.slug, "original-title");
    }

    #[tokio::test]
    async fn update_missing_id_maps_to_not_found() {
        let store = Arc::new(MemoryStore::new());
        let repo = BlogRepo::new(store);
        repo.create(new_post("T", "c")).await.unwrap();
        let err = repo
            .update(
                "missing",
                BlogPatch {
                    title: "T".to_string(),
                    content: "c".to_string(),
                    excerpt: None,
                    author: String::new(),
                    tags: vec![],
                    image_url: None,
                },
            )
            .await
            .unwrap_err();
        assert_matches!(err, AdminError::NotFound { .. });
    }
}
