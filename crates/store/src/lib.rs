//! Document store for the Storefront API
//!
//! Provides a collection-scoped, schema-flexible document store behind the
//! `DocumentStore` trait:
//! - `PostgresStore` keeps documents as JSONB rows in a single table
//! - `MemoryStore` keeps documents in process for tests and local development
//!
//! The handle is constructed once at startup and shared as
//! `Arc<dyn DocumentStore>` by the auth backend and the route state.

pub mod document;
pub mod error;
pub mod memory;
pub mod postgres;

use async_trait::async_trait;

pub use document::{DeleteResult, Document, Filter, InsertResult, UpdateResult, ID_FIELD};
pub use error::StoreError;
pub use memory::MemoryStore;
pub use postgres::PostgresStore;

/// Collection names used by the Storefront API
pub mod collections {
    pub const PRODUCTS: &str = "products";
    pub const REVIEWS: &str = "reviews";
    pub const CARTS: &str = "carts";
    pub const USERS: &str = "users";
}

/// Collection-scoped document operations.
///
/// Filters are field-equality conjunctions (see [`Filter`]). Single-document
/// operations act on the first matching document in insertion order.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents in `collection` matching `filter`, in insertion order
    async fn find(&self, collection: &str, filter: &Filter) -> Result<Vec<Document>, StoreError>;

    /// First document in `collection` matching `filter`
    async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Option<Document>, StoreError>;

    /// Insert a document, assigning `_id` when the caller did not supply one
    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<InsertResult, StoreError>;

    /// Set the given fields on the first document matching `filter`
    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        set: Document,
    ) -> Result<UpdateResult, StoreError>;

    /// Delete the first document matching `filter`
    async fn delete_one(&self, collection: &str, filter: &Filter)
        -> Result<DeleteResult, StoreError>;

    /// Round-trip to the backend to confirm it is reachable
    async fn ping(&self) -> Result<(), StoreError>;

    /// Release backend resources. Called once after the server stops.
    async fn close(&self) {}
}
