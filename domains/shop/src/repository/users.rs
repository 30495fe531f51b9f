//! User repository

use std::sync::Arc;

use serde_json::Value;
use storefront_auth::Role;
use storefront_common::Result;
use storefront_store::{
    collections::USERS, DeleteResult, Document, DocumentStore, Filter, InsertResult,
    UpdateResult,
};
use uuid::Uuid;

use crate::domain::entities::EMAIL_FIELD;

#[derive(Clone)]
pub struct UserRepository {
    store: Arc<dyn DocumentStore>,
}

impl UserRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Document>> {
        Ok(self.store.find(USERS, &Filter::all()).await?)
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Document>> {
        Ok(self
            .store
            .find_one(USERS, &Filter::eq(EMAIL_FIELD, email))
            .await?)
    }

    pub async fn create(&self, user: Document) -> Result<InsertResult> {
        Ok(self.store.insert_one(USERS, user).await?)
    }

    /// Grant the admin role to a user
    pub async fn promote_to_admin(&self, id: Uuid) -> Result<UpdateResult> {
        let mut set = Document::new();
        set.insert(
            Role::FIELD.to_string(),
            Value::String(Role::Admin.as_str().to_string()),
        );

        Ok(self.store.update_one(USERS, &Filter::by_id(id), set).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult> {
        Ok(self.store.delete_one(USERS, &Filter::by_id(id)).await?)
    }
}
