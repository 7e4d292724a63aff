use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised while building domain values from raw input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid day-month key '{0}', expected DD-MM")]
    InvalidDayMonth(String),

    #[error("invalid month {0}, expected 1-12")]
    InvalidMonth(i64),
}

pub type Result<T> = StdResult<T, CoreError>;
