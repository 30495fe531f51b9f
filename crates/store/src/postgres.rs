//! Postgres-backed document store
//!
//! Every collection lives in the single `documents` table with a JSONB body.
//! Equality filters are evaluated with JSONB containment (`body @> filter`).
//! Uses runtime `sqlx::query` (not macros) so the crate builds without a
//! live database.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{types::Json, PgPool};

use crate::document::{check_update, into_document, prepare_insert};
use crate::{
    DeleteResult, Document, DocumentStore, Filter, InsertResult, StoreError, UpdateResult,
};

#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect and apply the embedded migrations
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPool::connect(database_url).await?;
        sqlx::migrate!("../../migrations").run(&pool).await?;
        tracing::info!("Document store migrations applied");
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl DocumentStore for PostgresStore {
    async fn find(&self, collection: &str, filter: &Filter) -> Result<Vec<Document>, StoreError> {
        let rows: Vec<(Json<Value>,)> = sqlx::query_as(
            r#"
            SELECT body
            FROM documents
            WHERE collection = $1 AND body @> $2
            ORDER BY seq ASC
            "#,
        )
        .bind(collection)
        .bind(Json(filter.to_json()))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|(body,)| into_document(body.0)).collect()
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Option<Document>, StoreError> {
        let row: Option<(Json<Value>,)> = sqlx::query_as(
            r#"
            SELECT body
            FROM documents
            WHERE collection = $1 AND body @> $2
            ORDER BY seq ASC
            LIMIT 1
            "#,
        )
        .bind(collection)
        .bind(Json(filter.to_json()))
        .fetch_optional(&self.pool)
        .await?;

        row.map(|(body,)| into_document(body.0)).transpose()
    }

    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<InsertResult, StoreError> {
        let (id, document) = prepare_insert(document)?;

        sqlx::query(
            r#"
            INSERT INTO documents (id, collection, body, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            "#,
        )
        .bind(id)
        .bind(collection)
        .bind(Json(Value::Object(document)))
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::InvalidDocument(format!("duplicate {} {}", crate::ID_FIELD, id))
            }
            other => StoreError::Database(other),
        })?;

        tracing::debug!(collection, id = %id, "Inserted document");

        Ok(InsertResult {
            acknowledged: true,
            inserted_id: id.to_string(),
        })
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        set: Document,
    ) -> Result<UpdateResult, StoreError> {
        check_update(&set)?;

        let modified: Option<(bool,)> = sqlx::query_as(
            r#"
            WITH target AS (
                SELECT id, body
                FROM documents
                WHERE collection = $1 AND body @> $2
                ORDER BY seq ASC
                LIMIT 1
                FOR UPDATE
            )
            UPDATE documents AS d
            SET body = d.body || $3, updated_at = NOW()
            FROM target
            WHERE d.id = target.id
            RETURNING NOT (target.body @> $3)
            "#,
        )
        .bind(collection)
        .bind(Json(filter.to_json()))
        .bind(Json(Value::Object(set)))
        .fetch_optional(&self.pool)
        .await?;

        Ok(match modified {
            Some((modified,)) => UpdateResult {
                acknowledged: true,
                matched_count: 1,
                modified_count: u64::from(modified),
            },
            None => UpdateResult {
                acknowledged: true,
                matched_count: 0,
                modified_count: 0,
            },
        })
    }

    async fn delete_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<DeleteResult, StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM documents
            WHERE seq = (
                SELECT seq
                FROM documents
                WHERE collection = $1 AND body @> $2
                ORDER BY seq ASC
                LIMIT 1
            )
            "#,
        )
        .bind(collection)
        .bind(Json(filter.to_json()))
        .execute(&self.pool)
        .await?;

        Ok(DeleteResult {
            acknowledged: true,
            deleted_count: result.rows_affected(),
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Document store connection pool closed");
    }
}
