/*!
 * Document Store
 * Interface to the remote, schema-less document database holding the four
 * content collections. The store offers no transactions, no uniqueness
 * constraints and no change feed; callers re-list after every mutation.
 */
pub mod memory;

use async_trait::async_trait;
use serde_json::Value;

pub use memory::MemoryStore;

/// One document as returned by the store: an opaque id plus its fields.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub fields: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Field-ordered listing, e.g. `OrderBy::desc("date")`.
#[derive(Debug, Clone)]
pub struct OrderBy {
    pub field: String,
    pub order: SortOrder,
}

impl OrderBy {
    pub fn asc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            order: SortOrder::Asc,
        }
    }

    pub fn desc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            order: SortOrder::Desc,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The remote call failed (network/transport).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// An update targeted an id that does not exist.
    #[error("no document {id} in {collection}")]
    NotFound { collection: String, id: String },
}

/// Collection-scoped access to the remote document database.
///
/// `update` has merge semantics: only the top-level fields present in the
/// patch are replaced, everything else is left untouched. `delete` is
/// idempotent; removing a missing id is not an error.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document, returning the store-generated id.
    async fn insert(&self, collection: &str, fields: Value) -> Result<String, StoreError>;

    /// Fetch every document in a collection, ordered by a field.
    async fn list(&self, collection: &str, order: OrderBy) -> Result<Vec<Document>, StoreError>;

    /// Merge the patch's top-level fields into an existing document.
    async fn update(&self, collection: &str, id: &str, patch: Value) -> Result<(), StoreError>;

    /// Remove a document by id.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;
}
