//! Service layer for the historical news archive.
//!
//! Sits between HTTP/CLI front ends and storage: validates request
//! parameters and runs the day-of-year fallback scan.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(missing_debug_implementations, reason = "Internal types")]

mod archive_service;
mod clock;
mod error;
pub mod params;
mod resolver;

pub use archive_service::ArchiveService;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::ServiceError;
pub use resolver::{resolve_nearest_day, FallbackConfig, Resolution};
