//! Storage layer for the historical news archive.
//!
//! One table, read-only. `PgStorage` talks to PostgreSQL through sqlx;
//! `MemoryStore` (feature `test-support`) mirrors its query semantics in memory.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

pub mod error;
#[cfg(any(test, feature = "test-support"))]
mod memory;
mod pg_migrations;
mod pg_storage;
pub mod traits;

pub use error::StorageError;
#[cfg(any(test, feature = "test-support"))]
pub use memory::MemoryStore;
pub use pg_storage::PgStorage;
pub use traits::{ArchiveStore, EntryStore, StatsStore};
