//! Database layer - connection pool, store trait and repositories
//!
//! # Design Principles
//!
//! - Connection pool, one pooled connection per statement
//! - Exactly one SQL statement per operation, no transactions
//! - Id generation and uniqueness are left to the database

pub mod pool;
pub mod repos;
pub mod store;

pub use pool::{create_pool, StoreConfig};
pub use repos::MySqlItemStore;
pub use store::{DbError, ItemStore};
