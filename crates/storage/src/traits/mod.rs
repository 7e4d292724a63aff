//! Storage trait abstraction.
//!
//! Async read traits over the archive table so the resolver, services and
//! handlers can run against PostgreSQL or an in-memory store.

pub mod entry;
pub mod stats;

pub use entry::EntryStore;
pub use stats::StatsStore;

/// Everything the query service needs from a store.
pub trait ArchiveStore: EntryStore + StatsStore {}

impl<T: EntryStore + StatsStore> ArchiveStore for T {}
