//! Item record and request payload

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `items` table.
///
/// `description` is serialized as `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl Item {
    /// Pair a store-assigned id with the submitted fields.
    pub fn with_id(id: i64, req: ItemRequest) -> Self {
        Self {
            id,
            name: req.name,
            description: req.description,
        }
    }
}

/// Body of `POST /api/items` and `PUT /api/items/{id}`.
///
/// Only the presence and type of `name` are checked; an empty string is
/// accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
