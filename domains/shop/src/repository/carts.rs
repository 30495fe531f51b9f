//! Cart repository

use std::sync::Arc;

use storefront_common::Result;
use storefront_store::{
    collections::CARTS, DeleteResult, Document, DocumentStore, Filter, InsertResult,
};
use uuid::Uuid;

use crate::domain::entities::EMAIL_FIELD;

#[derive(Clone)]
pub struct CartRepository {
    store: Arc<dyn DocumentStore>,
}

impl CartRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Cart items belonging to one email
    pub async fn list_by_email(&self, email: &str) -> Result<Vec<Document>> {
        Ok(self
            .store
            .find(CARTS, &Filter::eq(EMAIL_FIELD, email))
            .await?)
    }

    pub async fn add(&self, item: Document) -> Result<InsertResult> {
        Ok(self.store.insert_one(CARTS, item).await?)
    }

    pub async fn remove(&self, id: Uuid) -> Result<DeleteResult> {
        Ok(self.store.delete_one(CARTS, &Filter::by_id(id)).await?)
    }
}
