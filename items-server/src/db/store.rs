//! Store abstraction handed to the HTTP handlers

use async_trait::async_trait;

use crate::models::{Item, ItemRequest};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("generated id {0} does not fit in a signed 64-bit integer")]
    IdOutOfRange(u64),
}

/// Persistence for the `items` table.
///
/// Every method issues exactly one statement. `update` and `delete`
/// report the number of affected rows; callers decide what a zero means.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Insert a row and return the id assigned by the store.
    async fn create(&self, req: &ItemRequest) -> Result<i64, DbError>;

    /// All rows, in the store's default order.
    async fn list(&self) -> Result<Vec<Item>, DbError>;

    /// Overwrite `name` and `description` of the row matching `id`.
    async fn update(&self, id: i64, req: &ItemRequest) -> Result<u64, DbError>;

    /// Remove the row matching `id`.
    async fn delete(&self, id: i64) -> Result<u64, DbError>;

    /// Round-trip a trivial statement to check connectivity.
    async fn ping(&self) -> Result<(), DbError>;
}
