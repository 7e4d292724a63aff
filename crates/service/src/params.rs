//! Interpretation of raw query-string parameters.
//!
//! An empty value (`q=`, `yearFrom=`) is treated like an absent one. Free text
//! that is only whitespace is still a search term; numeric parameters are
//! trimmed, so a whitespace-only year is also absent.

use historical_news_core::YearRange;

use crate::error::ServiceError;

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Required free-text parameter, passed through untrimmed.
pub fn require<'a>(name: &'static str, value: Option<&'a str>) -> Result<&'a str, ServiceError> {
    value.filter(|v| !v.is_empty()).ok_or(ServiceError::MissingParameter(name))
}

fn require_number<'a>(name: &'static str, value: Option<&'a str>) -> Result<&'a str, ServiceError> {
    present(value).ok_or(ServiceError::MissingParameter(name))
}

/// Required entry id.
pub fn parse_id(value: Option<&str>) -> Result<i64, ServiceError> {
    let raw = require_number("id", value)?;
    raw.trim().parse().map_err(|_| ServiceError::InvalidParameter { name: "id", value: raw.to_owned() })
}

/// Required month number, 1-12. Leading zeros are accepted (`06`).
pub fn parse_month(value: Option<&str>) -> Result<u32, ServiceError> {
    let raw = require_number("month", value)?;
    match raw.trim().parse::<u32>() {
        Ok(month) if (1..=12).contains(&month) => Ok(month),
        _ => Err(ServiceError::InvalidParameter { name: "month", value: raw.to_owned() }),
    }
}

fn parse_year(name: &'static str, value: Option<&str>) -> Result<Option<i32>, ServiceError> {
    present(value)
        .map(|raw| {
            raw.trim()
                .parse::<i32>()
                .map_err(|_| ServiceError::InvalidParameter { name, value: raw.to_owned() })
        })
        .transpose()
}

/// Optional inclusive year bounds.
pub fn parse_year_range(
    year_from: Option<&str>,
    year_to: Option<&str>,
) -> Result<YearRange, ServiceError> {
    Ok(YearRange::new(parse_year("yearFrom", year_from)?, parse_year("yearTo", year_to)?))
}
