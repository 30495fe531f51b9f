//! Review repository

use std::sync::Arc;

use storefront_common::Result;
use storefront_store::{collections::REVIEWS, Document, DocumentStore, Filter};

#[derive(Clone)]
pub struct ReviewRepository {
    store: Arc<dyn DocumentStore>,
}

impl ReviewRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Document>> {
        Ok(self.store.find(REVIEWS, &Filter::all()).await?)
    }
}
