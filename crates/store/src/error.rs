//! Document store errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
