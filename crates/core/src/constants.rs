//! Shared constants for the archive.

/// Default fallback bound for the day-of-year scan.
pub const DEFAULT_FALLBACK_DAYS: u32 = 365;

/// Bound that visits every day of a leap year once.
pub const FULL_YEAR_FALLBACK_DAYS: u32 = 366;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Default HTTP port.
pub const DEFAULT_HTTP_PORT: u16 = 3050;

/// Name of the single archive table.
pub const ENTRY_TABLE: &str = "data";

/// Payload message when the day-of-year scan finds nothing.
pub const NO_ENTRIES_MESSAGE: &str = "No entries found for today or the past year.";

/// Payload message when a content search finds nothing.
pub const NO_MATCHES_MESSAGE: &str = "No matching entries found.";
