//! In-memory document store
//!
//! Keeps collections in process for tests and local development. Mirrors the
//! semantics of `PostgresStore`: insertion order is preserved, and
//! single-document operations act on the first match.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::document::{check_update, prepare_insert};
use crate::{
    DeleteResult, Document, DocumentStore, Filter, InsertResult, StoreError, UpdateResult,
};

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in a collection
    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .map(|c| c.get(collection).map_or(0, Vec::len))
            .unwrap_or(0)
    }

    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }
}

fn poisoned<T>(_: PoisonError<T>) -> StoreError {
    StoreError::Unavailable("memory store lock poisoned".to_string())
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(&self, collection: &str, filter: &Filter) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().map_err(poisoned)?;
        Ok(collections
            .get(collection)
            .map(|docs| docs.iter().filter(|d| filter.matches(d)).cloned().collect())
            .unwrap_or_default())
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().map_err(poisoned)?;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| filter.matches(d)).cloned()))
    }

    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<InsertResult, StoreError> {
        let (id, document) = prepare_insert(document)?;
        let inserted_id = id.to_string();

        let mut collections = self.collections.write().map_err(poisoned)?;
        let docs = collections.entry(collection.to_string()).or_default();

        if docs
            .iter()
            .any(|d| d.get(crate::ID_FIELD) == document.get(crate::ID_FIELD))
        {
            return Err(StoreError::InvalidDocument(format!(
                "duplicate {} {}",
                crate::ID_FIELD,
                inserted_id
            )));
        }

        docs.push(document);
        tracing::debug!(collection, id = %inserted_id, "Inserted document");

        Ok(InsertResult {
            acknowledged: true,
            inserted_id,
        })
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        set: Document,
    ) -> Result<UpdateResult, StoreError> {
        check_update(&set)?;

        let mut collections = self.collections.write().map_err(poisoned)?;
        let target = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| filter.matches(d)));

        let Some(document) = target else {
            return Ok(UpdateResult {
                acknowledged: true,
                matched_count: 0,
                modified_count: 0,
            });
        };

        let modified = set.iter().any(|(k, v)| document.get(k) != Some(v));
        document.extend(set);

        Ok(UpdateResult {
            acknowledged: true,
            matched_count: 1,
            modified_count: u64::from(modified),
        })
    }

    async fn delete_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<DeleteResult, StoreError> {
        let mut collections = self.collections.write().map_err(poisoned)?;
        let deleted_count = match collections.get_mut(collection) {
            Some(docs) => match docs.iter().position(|d| filter.matches(d)) {
                Some(index) => {
                    docs.remove(index);
                    1
                }
                None => 0,
            },
            None => 0,
        };

        Ok(DeleteResult {
            acknowledged: true,
            deleted_count,
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.collections.read().map_err(poisoned).map(|_| ())
    }
}
