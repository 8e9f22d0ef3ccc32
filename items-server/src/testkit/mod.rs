//! In-process stores for exercising the router without a database.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! - [`MemoryItemStore`] behaves like an auto-increment table.
//! - [`UnavailableItemStore`] fails every call the way an unreachable
//!   database does.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::db::{DbError, ItemStore};
use crate::models::{Item, ItemRequest};

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Item>,
    last_id: i64,
}

/// Auto-increment table held in memory.
#[derive(Default)]
pub struct MemoryItemStore {
    table: Mutex<Table>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn create(&self, req: &ItemRequest) -> Result<i64, DbError> {
        let mut table = self.table.lock().await;
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(id, Item::with_id(id, req.clone()));
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<Item>, DbError> {
        Ok(self.table.lock().await.rows.values().cloned().collect())
    }

    async fn update(&self, id: i64, req: &ItemRequest) -> Result<u64, DbError> {
        let mut table = self.table.lock().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                row.name = req.name.clone();
                row.description = req.description.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let removed = self.table.lock().await.rows.remove(&id);
        Ok(u64::from(removed.is_some()))
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}

/// Store whose every call fails with a pool timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableItemStore;

impl UnavailableItemStore {
    fn unavailable() -> DbError {
        DbError::Sqlx(sqlx::Error::PoolTimedOut)
    }
}

#[async_trait]
impl ItemStore for UnavailableItemStore {
    async fn create(&self, _req: &ItemRequest) -> Result<i64, DbError> {
        Err(Self::unavailable())
    }

    async fn list(&self) -> Result<Vec<Item>, DbError> {
        Err(Self::unavailable())
    }

    async fn update(&self, _id: i64, _req: &ItemRequest) -> Result<u64, DbError> {
        Err(Self::unavailable())
    }

    async fn delete(&self, _id: i64) -> Result<u64, DbError> {
        Err(Self::unavailable())
    }

    async fn ping(&self) -> Result<(), DbError> {
        Err(Self::unavailable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str) -> ItemRequest {
        ItemRequest {
            name: name.into(),
            description: None,
        }
    }

    #[tokio::test]
    async fn ids_are_never_reused() {
        let store = MemoryItemStore::new();
        let first = store.create(&request("a")).await.unwrap();
        store.delete(first).await.unwrap();
        let second = store.create(&request("b")).await.unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn affected_rows_reflect_matches() {
        let store = MemoryItemStore::new();
        let id = store.create(&request("a")).await.unwrap();

        assert_eq!(store.update(id, &request("b")).await.unwrap(), 1);
        assert_eq!(store.update(id + 1, &request("c")).await.unwrap(), 0);
        assert_eq!(store.delete(id).await.unwrap(), 1);
        assert_eq!(store.delete(id).await.unwrap(), 0);
    }
}
