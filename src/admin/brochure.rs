//! Brochure workflow, including the single-featured invariant: at most one
//! brochure in the collection is featured at a time. The rule is checked
//! against the cached list before any write (check-then-act; two concurrent
//! clients can still race each other, which is a documented limitation of
//! the store's lack of constraints).

use super::Admin;
use crate::error::AdminError;
use crate::repos::NewBrochure;
use crate::upload::UploadError;

const FEATURED_CONFLICT: &str =
    "Only one brochure can be featured at a time. Please unfeature the existing one first.";

fn failure_message(err: &AdminError) -> String {
    match err {
        AdminError::Validation(msg) | AdminError::Upload(msg) => msg.clone(),
        _ => "Failed to add brochure".to_string(),
    }
}

impl Admin {
    pub async fn submit_brochure(&mut self) {
        match self.submit_brochure_inner().await {
            Ok(()) => {
                self.state.brochure_form.reset();
                self.state.notify_success("Brochure added successfully!");
            }
            Err(err) => {
                tracing::error!("Brochure submit failed: {}", err);
                self.state.notify_error(failure_message(&err));
            }
        }
    }

    async fn submit_brochure_inner(&mut self) -> Result<(), AdminError> {
        let form = self.state.brochure_form.clone();

        if form.title.trim().is_empty() {
            return Err(AdminError::Validation("Title is required".to_string()));
        }
        if form.download_url.trim().is_empty() {
            return Err(AdminError::Validation(
                "Download URL is required".to_string(),
            ));
        }
        // Reject before any upload or write when the cached list already
        // holds a featured brochure.
        if form.featured && self.state.brochures.iter().any(|b| b.featured) {
            return Err(AdminError::Validation(FEATURED_CONFLICT.to_string()));
        }

        let preview_url = match &form.preview_file {
            Some(file) => Some(self.uploader.upload(file).await.map_err(
                |UploadError(msg)| {
                    AdminError::Upload(format!("Preview image upload failed: {}", msg))
                },
            )?),
            None => None,
        };

        self.brochures
            .create(NewBrochure {
                title: form.title,
                description: form.description,
                brochure_type: form.brochure_type,
                category: form.category,
                featured: form.featured,
                download_url: form.download_url,
                preview_url,
            })
            .await?;

        self.refresh_brochures().await;
        Ok(())
    }

    /// Toggle a brochure's featured flag. Unfeaturing is unconditional;
    /// featuring is rejected while another brochure in the cached list is
    /// featured.
    pub async fn toggle_featured(&mut self, id: &str, currently_featured: bool) {
        if currently_featured {
            match self.brochures.set_featured(id, false).await {
                Ok(()) => {
                    self.state
                        .notify_success("Brochure unfeatured successfully!");
                    self.refresh_brochures().await;
                }
                Err(e) => {
                    tracing::error!("Error unfeaturing brochure {}: {}", id, e);
                    self.state.notify_error("Failed to update brochure");
                }
            }
            return;
        }

        let conflict = self
            .state
            .brochures
            .iter()
            .any(|b| b.featured && b.id != id);
        if conflict {
            self.state.notify_error(FEATURED_CONFLICT);
            return;
        }

        match self.brochures.set_featured(id, true).await {
            Ok(()) => {
                self.state.notify_success("Brochure featured successfully!");
                self.refresh_brochures().await;
            }
            Err(e) => {
                tracing::error!("Error featuring brochure {}: {}", id, e);
                self.state.notify_error("Failed to update brochure");
            }
        }
    }

    /// Delete a brochure by id. Confirmation happens in the UI before this
    /// is called.
    pub async fn delete_brochure(&mut self, id: &str) {
        match self.brochures.delete(id).await {
            Ok(()) => {
                self.state.notify_success("Brochure deleted successfully!");
                self.refresh_brochures().await;
            }
            Err(e) => {
                tracing::error!("Error deleting brochure {}: {}", id, e);
                self.state.notify_error("Failed to delete brochure");
            }
        }
    }
}
