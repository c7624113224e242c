//! Error types shared across the admin core.
//!
//! Every failure an admin action can hit ends up as an [`AdminError`] and is
//! converted into a transient toast by the orchestrator; nothing propagates
//! past it.

use crate::store::StoreError;
use crate::upload::UploadError;

#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    /// A required field is missing/blank or a cross-entity invariant would
    /// be violated (duplicate tag slug, second featured brochure). No write
    /// is attempted.
    #[error("{0}")]
    Validation(String),

    /// The image upload failed or returned no URL. Aborts the dependent
    /// create/update before any document write. Carries the full
    /// user-facing message, already naming the upload specifically.
    #[error("{0}")]
    Upload(String),

    /// The remote store call itself failed (network/transport).
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Update/delete targeted an id no longer present. Actions are only
    /// offered for ids in the cached lists, so this means another client
    /// removed the document since the last refresh.
    #[error("Document not found: {collection}/{id}")]
    NotFound { collection: String, id: String },

    /// The admin workflows were entered without a signed-in user.
    #[error("Not signed in")]
    Unauthorized,
}

impl From<StoreError> for AdminError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(msg) => AdminError::StoreUnavailable(msg),
            StoreError::NotFound { collection, id } => AdminError::NotFound { collection, id },
        }
    }
}

impl From<UploadError> for AdminError {
    fn from(err: UploadError) -> Self {
        AdminError::Upload(format!("Image upload failed: {}", err.0))
    }
}
