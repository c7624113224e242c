//! Blog workflow: submit state machine, edit mode, deletion.
//!
//! A submission runs Idle -> Submitting -> Idle. The `submitting` flag makes
//! a second submit a no-op while one is in flight, and a 30 s timeout
//! forcibly returns a hung submission to Idle with a timeout toast so the
//! form never stays disabled forever.

use tokio::time::timeout;

use super::Admin;
use crate::error::AdminError;
use crate::repos::{BlogPatch, NewBlogPost};
use crate::slug::slugify;

fn failure_message(err: &AdminError, editing: bool) -> String {
    match err {
        AdminError::Validation(msg) | AdminError::Upload(msg) => msg.clone(),
        _ if editing => "Failed to update blog".to_string(),
        _ => "Failed to add blog".to_string(),
    }
}

impl Admin {
    /// Submit the blog form: create when no edit target is recorded, update
    /// otherwise. Validation order: title, content, optional image upload,
    /// then slug and post number (create only), then the write.
    pub async fn submit_blog(&mut self) {
        if self.state.blog_form.submitting {
            tracing::debug!("Blog submit ignored: submission already in flight");
            return;
        }
        self.state.blog_form.submitting = true;

        let editing = self.state.blog_form.editing_id.is_some();
        let result = timeout(self.config.submit_timeout, self.submit_blog_inner()).await;

        match result {
            Ok(Ok(message)) => {
                self.state.blog_form.reset();
                self.state.notify_success(message);
            }
            Ok(Err(err)) => {
                tracing::error!("Blog submit failed: {}", err);
                self.state.notify_error(failure_message(&err, editing));
            }
            Err(_) => {
                tracing::error!("Blog submit timed out after {:?}", self.config.submit_timeout);
                self.state
                    .notify_error("Submission timed out. Please try again.");
            }
        }

        self.state.blog_form.submitting = false;
    }

    async fn submit_blog_inner(&mut self) -> Result<&'static str, AdminError> {
        let form = self.state.blog_form.clone();

        if form.title.trim().is_empty() {
            return Err(AdminError::Validation("Title is required".to_string()));
        }
        if form.content.trim().is_empty() {
            return Err(AdminError::Validation("Content is required".to_string()));
        }

        let image_url = match &form.image_file {
            Some(file) => Some(self.uploader.upload(file).await?),
            None => None,
        };
        let excerpt = Some(form.excerpt).filter(|e| !e.trim().is_empty());

        let message = if let Some(id) = &form.editing_id {
            // postNumber, date and slug are create-time facts; an edit never
            // touches them.
            self.blogs
                .update(
                    id,
                    BlogPatch {
                        title: form.title,
                        content: form.content,
                        excerpt,
                        author: form.author,
                        tags: form.selected_tags,
                        image_url,
                    },
                )
                .await?;
            "Blog updated successfully!"
        } else {
            self.blogs
                .create(NewBlogPost {
                    slug: slugify(&form.title),
                    post_number: self.next_post_number(),
                    title: form.title,
                    content: form.content,
                    excerpt,
                    author: form.author,
                    tags: form.selected_tags,
                    image_url,
                })
                .await?;
            "Blog added successfully!"
        };

        self.refresh_blogs().await;
        Ok(message)
    }

    /// 1 + the highest post number in the cached list, or 1 for the first
    /// post ever.
    fn next_post_number(&self) -> u32 {
        self.state
            .blogs
            .iter()
            .map(|b| b.post_number)
            .max()
            .map(|max| max + 1)
            .unwrap_or(1)
    }

    /// Load an existing post into the form and record it as the edit target.
    pub fn edit_blog(&mut self, id: &str) {
        if let Some(post) = self.state.blogs.iter().find(|b| b.id == id) {
            let post = post.clone();
            self.state.blog_form.load(&post);
        }
    }

    pub fn cancel_blog_edit(&mut self) {
        self.state.blog_form.reset();
    }

    /// Delete a post by id. Confirmation happens in the UI before this is
    /// called.
    pub async fn delete_blog(&mut self, id: &str) {
        match self.blogs.delete(id).await {
            Ok(()) => {
                self.state.notify_success("Blog deleted successfully!");
                self.refresh_blogs().await;
            }
            Err(e) => {
                tracing::error!("Error deleting blog {}: {}", id, e);
                self.state.notify_error("Failed to delete blog");
            }
        }
    }
}
