//! Tag workflow. Tag slugs must stay unique across the collection; the
//! check runs against the cached list before the write, since the store
//! offers no uniqueness constraint.

use super::Admin;
use crate::error::AdminError;
use crate::slug::slugify;

impl Admin {
    /// Create a tag from the form's name. A blank name is a silent no-op;
    /// a name whose derived slug is empty or collides with an existing
    /// tag's slug is rejected without a write.
    pub async fn add_tag(&mut self) {
        let name = self.state.new_tag_name.trim().to_string();
        if name.is_empty() {
            return;
        }

        let slug = slugify(&name);
        if slug.is_empty() {
            self.state
                .notify_error("Tag name must contain letters or numbers");
            return;
        }
        if self.state.tags.iter().any(|t| t.slug == slug) {
            self.state.notify_error("Tag already exists");
            return;
        }

        match self.tags.create(&name, &slug).await {
            Ok(_) => {
                self.state.new_tag_name.clear();
                self.state.notify_success("Tag added successfully!");
                self.refresh_tags().await;
            }
            Err(AdminError::Validation(msg)) => self.state.notify_error(msg),
            Err(e) => {
                tracing::error!("Error adding tag: {}", e);
                self.state.notify_error("Failed to add tag");
            }
        }
    }

    /// Delete a tag by id. Deliberately no cascade: blog posts keep the
    /// orphaned id in their tag sets and renderers skip unknown ids.
    /// Confirmation happens in the UI before this is called.
    pub async fn delete_tag(&mut self, id: &str) {
        match self.tags.delete(id).await {
            Ok(()) => {
                self.state.notify_success("Tag deleted successfully!");
                self.refresh_tags().await;
            }
            Err(e) => {
                tracing::error!("Error deleting tag {}: {}", id, e);
                self.state.notify_error("Failed to delete tag");
            }
        }
    }
}
