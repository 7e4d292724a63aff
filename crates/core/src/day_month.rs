//! Year-agnostic day-of-year key.
//!
//! Entries are matched across years by their `DD-MM` projection. Any pair that
//! exists in a leap year is a valid key. Stepping backwards follows the
//! calendar of a given year, so `29-02` is only visited in leap years.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

/// Leap year used to validate keys.
const KEY_YEAR: i32 = 2000;

/// `DD-MM` projection of a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayMonth {
    month: u32,
    day: u32,
}

impl DayMonth {
    /// Build a key, rejecting pairs that do not exist in a leap year.
    pub fn new(day: u32, month: u32) -> Result<Self, CoreError> {
        NaiveDate::from_ymd_opt(KEY_YEAR, month, day)
            .map(|_| Self { month, day })
            .ok_or_else(|| CoreError::InvalidDayMonth(format!("{day:02}-{month:02}")))
    }

    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Previous key in `year`'s calendar. `01-01` wraps to `31-12`, and
    /// `01-03` steps to `28-02` unless `year` is a leap year.
    ///
    /// `29-02` in a non-leap year steps to `28-02`.
    #[must_use]
    pub fn pred_in(self, year: i32) -> Self {
        let Some(date) = NaiveDate::from_ymd_opt(year, self.month, self.day) else {
            return Self { month: 2, day: 28 };
        };
        date.pred_opt().map_or(Self { month: 12, day: 31 }, Self::from)
    }
}

impl From<NaiveDate> for DayMonth {
    fn from(date: NaiveDate) -> Self {
        Self { month: date.month(), day: date.day() }
    }
}

impl fmt::Display for DayMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.day, self.month)
    }
}

impl FromStr for DayMonth {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidDayMonth(s.to_owned());
        let (day, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if day.len() != 2 || month.len() != 2 {
            return Err(invalid());
        }
        let day: u32 = day.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(day, month).map_err(|_| invalid())
    }
}

impl Serialize for DayMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> DayMonth {
        s.parse().unwrap()
    }

    #[test]
    fn formats_zero_padded_day_first() {
        let date = NaiveDate::from_ymd_opt(1920, 6, 5).unwrap();
        assert_eq!(DayMonth::from(date).to_string(), "05-06");
    }

    #[test]
    fn new_year_steps_back_to_december() {
        assert_eq!(key("01-01").pred_in(2023), key("31-12"));
        assert_eq!(key("01-01").pred_in(2024), key("31-12"));
    }

    #[test]
    fn first_of_march_follows_the_years_calendar() {
        assert_eq!(key("01-03").pred_in(2024), key("29-02"));
        assert_eq!(key("29-02").pred_in(2024), key("28-02"));
        assert_eq!(key("01-03").pred_in(2023), key("28-02"));
        assert_eq!(key("01-03").pred_in(1900), key("28-02"));
    }

    #[test]
    fn leap_day_in_common_year_steps_to_28th() {
        assert_eq!(key("29-02").pred_in(2023), key("28-02"));
    }

    #[test]
    fn month_boundaries_use_month_length() {
        assert_eq!(key("01-05").pred_in(2023), key("30-04"));
        assert_eq!(key("01-08").pred_in(2023), key("31-07"));
        assert_eq!(key("16-06").pred_in(2023), key("15-06"));
    }

    fn cycle_len(year: i32) -> usize {
        let start = key("15-06");
        let mut current = start;
        let mut seen = std::collections::HashSet::new();
        loop {
            assert!(seen.insert(current));
            current = current.pred_in(year);
            if current == start {
                break;
            }
        }
        seen.len()
    }

    #[test]
    fn stepping_cycles_through_the_years_days() {
        assert_eq!(cycle_len(2023), 365);
        assert_eq!(cycle_len(2024), 366);
    }

    #[test]
    fn rejects_malformed_keys() {
        for raw in ["", "1-6", "15/06", "32-01", "30-02", "00-05", "15-13", "aa-bb", "15-06-1920"] {
            assert!(raw.parse::<DayMonth>().is_err(), "{raw} should not parse");
        }
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&key("29-02")).unwrap();
        assert_eq!(json, "\"29-02\"");
        let back: DayMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key("29-02"));
    }
}
