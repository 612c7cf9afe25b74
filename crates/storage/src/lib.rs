//! Storage layer for leadtrack
//!
//! SQLite-based persistence for the `lead` table, behind an r2d2
//! connection pool. All methods are synchronous; async callers bridge
//! with `spawn_blocking`.

mod error;
mod migrations;
mod store;
#[cfg(test)]
mod tests;

pub use error::StorageError;
pub use store::LeadStore;
