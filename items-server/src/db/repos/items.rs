//! Item repository over MySQL
//!
//! One parameterized statement per operation:
//! - create: INSERT, id from `last_insert_id`
//! - list: SELECT all rows, no ordering clause
//! - update/delete: affected rows reported, never checked

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::db::store::{DbError, ItemStore};
use crate::models::{Item, ItemRequest};

/// `ItemStore` backed by a MySQL pool.
#[derive(Clone)]
pub struct MySqlItemStore {
    pool: MySqlPool,
}

impl MySqlItemStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

/// Convert the driver's unsigned insert id.
///
/// Runs after the INSERT has committed: an out-of-range id means the row
/// exists even though the caller receives an error. Only reachable with a
/// `BIGINT UNSIGNED` id column past `i64::MAX`.
fn insert_id(id: u64) -> Result<i64, DbError> {
    i64::try_from(id).map_err(|_| DbError::IdOutOfRange(id))
}

#[async_trait]
impl ItemStore for MySqlItemStore {
    async fn create(&self, req: &ItemRequest) -> Result<i64, DbError> {
        let result = sqlx::query("INSERT INTO items (name, description) VALUES (?, ?)")
            .bind(&req.name)
            .bind(&req.description)
            .execute(&self.pool)
            .await?;

        insert_id(result.last_insert_id())
    }

    async fn list(&self) -> Result<Vec<Item>, DbError> {
        // id column width varies by schema (INT, BIGINT, unsigned)
        let items: Vec<Item> = sqlx::query_as(
            r#"
            SELECT CAST(id AS SIGNED) AS id, name, description
            FROM items
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn update(&self, id: i64, req: &ItemRequest) -> Result<u64, DbError> {
        let result = sqlx::query("UPDATE items SET name = ?, description = ? WHERE id = ?")
            .bind(&req.name)
            .bind(&req.description)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
