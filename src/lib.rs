//! Wedding Admin - content management core for a destination-wedding
//! planning site.
//!
//! The crate coordinates four content collections (blog posts, portfolio
//! items, tags, brochures) against a remote schema-less document store:
//! one repository per collection owning its entity's shape and defaulting,
//! and an orchestrator implementing the admin panel's workflows and the
//! cross-entity rules (unique tag slugs, at most one featured brochure,
//! monotonic post numbers).
//!
//! The store, the image host and the authentication check are external
//! collaborators behind traits ([`store::DocumentStore`],
//! [`upload::ImageUploader`], [`auth::AuthGate`]); an embedding UI drives
//! the [`admin::Admin`] orchestrator from its event handlers and renders
//! from [`admin::AdminState`].
//!
//! ```no_run
//! use std::sync::Arc;
//! use wedding_admin::admin::Admin;
//! use wedding_admin::auth::AuthGate;
//! use wedding_admin::config::AdminConfig;
//! use wedding_admin::store::MemoryStore;
//! use wedding_admin::upload::CloudinaryUploader;
//!
//! struct SignedIn;
//! impl AuthGate for SignedIn {
//!     fn is_signed_in(&self) -> bool {
//!         true
//!     }
//!     fn sign_out(&self) {}
//! }
//!
//! # async fn demo() -> Result<(), wedding_admin::error::AdminError> {
//! let config = AdminConfig::default();
//! let uploader = Arc::new(CloudinaryUploader::new(&config));
//! let mut admin = Admin::enter(
//!     Arc::new(MemoryStore::new()),
//!     uploader,
//!     Arc::new(SignedIn),
//!     config,
//! )?;
//! admin.refresh_all().await;
//! # Ok(())
//! # }
//! ```

pub mod admin;
pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod repos;
pub mod slug;
pub mod store;
pub mod upload;

pub use admin::Admin;
pub use config::AdminConfig;
pub use error::AdminError;
