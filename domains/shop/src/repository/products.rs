//! Product repository

use std::sync::Arc;

use storefront_common::Result;
use storefront_store::{
    collections::PRODUCTS, DeleteResult, Document, DocumentStore, Filter, InsertResult,
};
use uuid::Uuid;

#[derive(Clone)]
pub struct ProductRepository {
    store: Arc<dyn DocumentStore>,
}

impl ProductRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// List every product
    pub async fn list(&self) -> Result<Vec<Document>> {
        Ok(self.store.find(PRODUCTS, &Filter::all()).await?)
    }

    pub async fn create(&self, product: Document) -> Result<InsertResult> {
        Ok(self.store.insert_one(PRODUCTS, product).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult> {
        Ok(self.store.delete_one(PRODUCTS, &Filter::by_id(id)).await?)
    }
}
