//! Core types for the historical news archive.
//!
//! This crate contains domain types shared across all other crates.

mod constants;
mod day_month;
mod entry;
mod env_config;
mod error;
mod range;
mod tags;

pub use constants::*;
pub use day_month::DayMonth;
pub use entry::*;
pub use env_config::{env_non_blank, env_parse_with_default};
pub use error::*;
pub use range::YearRange;
pub use tags::TagList;
