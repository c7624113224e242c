/*!
 * Admin Orchestrator
 * Coordinates the four content repositories to implement the admin panel's
 * workflows: CRUD per collection, the cross-entity invariants (unique tag
 * slug, single featured brochure), post numbering, and the optimistic UI
 * state (cached lists, edit mode, transient toasts).
 *
 * Every action terminates in a toast; no error escapes past this layer
 * (failed actions stay independently retryable).
 */
mod blog;
mod brochure;
mod portfolio;
mod tags;
mod state;

use std::sync::Arc;

use crate::auth::AuthGate;
use crate::config::AdminConfig;
use crate::error::AdminError;
use crate::repos::{BlogRepo, BrochureRepo, PortfolioRepo, TagRepo};
use crate::store::DocumentStore;
use crate::upload::ImageUploader;

pub use state::{AdminState, AdminTab, BlogForm, BrochureForm, PortfolioForm, Toast, ToastKind};

pub struct Admin {
    pub(crate) blogs: BlogRepo,
    pub(crate) portfolio: PortfolioRepo,
    pub(crate) tags: TagRepo,
    pub(crate) brochures: BrochureRepo,
    pub(crate) uploader: Arc<dyn ImageUploader>,
    auth: Arc<dyn AuthGate>,
    pub(crate) config: AdminConfig,
    pub state: AdminState,
}

impl std::fmt::Debug for Admin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Admin")
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Admin {
    /// Enter the admin workflows. The only authorization the core performs:
    /// the gate must report a signed-in user.
    pub fn enter(
        store: Arc<dyn DocumentStore>,
        uploader: Arc<dyn ImageUploader>,
        auth: Arc<dyn AuthGate>,
        config: AdminConfig,
    ) -> Result<Self, AdminError> {
        if !auth.is_signed_in() {
            return Err(AdminError::Unauthorized);
        }
        let state = AdminState::new(config.toast_ttl);
        Ok(Self {
            blogs: BlogRepo::new(store.clone()),
            portfolio: PortfolioRepo::new(store.clone()),
            tags: TagRepo::new(store.clone()),
            brochures: BrochureRepo::new(store),
            uploader,
            auth,
            config,
            state,
        })
    }

    /// Initial load of all four collections.
    pub async fn refresh_all(&mut self) {
        self.refresh_blogs().await;
        self.refresh_portfolio_items().await;
        self.refresh_tags().await;
        self.refresh_brochures().await;
    }

    /// Re-list one collection in full. On failure the cached list keeps its
    /// last-known-good contents and the failure is surfaced as a toast.
    pub async fn refresh_blogs(&mut self) {
        match self.blogs.list().await {
            Ok(blogs) => self.state.blogs = blogs,
            Err(e) => {
                tracing::error!("Error fetching blogs: {}", e);
                self.state.notify_error("Failed to fetch blogs");
            }
        }
    }

    pub async fn refresh_portfolio_items(&mut self) {
        match self.portfolio.list().await {
            Ok(items) => self.state.portfolio_items = items,
            Err(e) => {
                tracing::error!("Error fetching portfolio items: {}", e);
                self.state.notify_error("Failed to fetch portfolio items");
            }
        }
    }

    pub async fn refresh_tags(&mut self) {
        match self.tags.list().await {
            Ok(tags) => self.state.tags = tags,
            Err(e) => {
                tracing::error!("Error fetching tags: {}", e);
                self.state.notify_error("Failed to fetch tags");
            }
        }
    }

    pub async fn refresh_brochures(&mut self) {
        match self.brochures.list().await {
            Ok(brochures) => self.state.brochures = brochures,
            Err(e) => {
                tracing::error!("Error fetching brochures: {}", e);
                self.state.notify_error("Failed to fetch brochures");
            }
        }
    }

    pub fn sign_out(&self) {
        self.auth.sign_out();
    }
}
