//! Domain models for the items table

pub mod item;

pub use item::{Item, ItemRequest};
