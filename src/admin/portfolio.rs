//! Portfolio workflow. A create requires a freshly chosen image file; an
//! edit may submit without one, in which case the stored image URL is kept.

use super::Admin;
use crate::error::AdminError;
use crate::repos::PortfolioFields;

fn failure_message(err: &AdminError, editing: bool) -> String {
    match err {
        AdminError::Validation(msg) | AdminError::Upload(msg) => msg.clone(),
        _ if editing => "Failed to update portfolio item".to_string(),
        _ => "Failed to add portfolio item".to_string(),
    }
}

impl Admin {
    pub async fn submit_portfolio(&mut self) {
        let editing = self.state.portfolio_form.editing_id.is_some();
        match self.submit_portfolio_inner().await {
            Ok(message) => {
                self.state.portfolio_form.reset();
                self.state.notify_success(message);
            }
            Err(err) => {
                tracing::error!("Error saving portfolio item: {}", err);
                self.state.notify_error(failure_message(&err, editing));
            }
        }
    }

    async fn submit_portfolio_inner(&mut self) -> Result<&'static str, AdminError> {
        let form = self.state.portfolio_form.clone();

        if form.editing_id.is_none() && form.image_file.is_none() {
            return Err(AdminError::Validation("Image is required".to_string()));
        }

        // Keep the stored image when editing without a new file.
        let image = match &form.image_file {
            Some(file) => self.uploader.upload(file).await?,
            None => form.image_url.clone(),
        };

        let fields = PortfolioFields {
            image,
            title: form.title,
            couple: form.couple,
            location: form.location,
            guests: form.guests,
            date: form.date,
            category: form.category,
            description: form.description,
            highlights: form.highlights,
        };

        let message = match &form.editing_id {
            Some(id) => {
                self.portfolio.update(id, fields).await?;
                "Portfolio item updated successfully!"
            }
            None => {
                self.portfolio.create(fields).await?;
                "Portfolio item added successfully!"
            }
        };

        self.refresh_portfolio_items().await;
        Ok(message)
    }

    pub fn edit_portfolio(&mut self, id: &str) {
        if let Some(item) = self.state.portfolio_items.iter().find(|i| i.id == id) {
            let item = item.clone();
            self.state.portfolio_form.load(&item);
        }
    }

    pub fn cancel_portfolio_edit(&mut self) {
        self.state.portfolio_form.reset();
    }

    /// Delete an item by id. Confirmation happens in the UI before this is
    /// called.
    pub async fn delete_portfolio(&mut self, id: &str) {
        match self.portfolio.delete(id).await {
            Ok(()) => {
                self.state
                    .notify_success("Portfolio item deleted successfully!");
                self.refresh_portfolio_items().await;
            }
            Err(e) => {
                tracing::error!("Error deleting portfolio item {}: {}", id, e);
                self.state.notify_error("Failed to delete portfolio item");
            }
        }
    }
}
