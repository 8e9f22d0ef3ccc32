//! items-server: HTTP CRUD over a single relational table
//!
//! Maps `/api/items` verbs onto one parameterized SQL statement each
//! and renders the outcome as JSON.

pub mod db;
pub mod http;
pub mod models;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

pub use db::{DbError, ItemStore, MySqlItemStore, StoreConfig};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
pub use models::{Item, ItemRequest};
