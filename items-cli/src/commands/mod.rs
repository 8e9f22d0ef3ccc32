//! Command implementations for the items CLI

pub mod serve;

pub use serve::run_serve;
