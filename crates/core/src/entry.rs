//! Archived newspaper entries and the aggregates derived from them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::day_month::DayMonth;
use crate::tags::TagList;

/// One digitized newspaper record.
///
/// Field names follow the `data` table columns so the JSON payloads keep the
/// shape the archive frontend reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub date: NaiveDate,
    pub day_month: DayMonth,
    pub year: i32,
    pub month: i32,
    pub place: Option<String>,
    pub place_corrected: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub content: String,
    pub words: TagList,
}

impl Entry {
    /// Entry whose redundant projections are derived from `date`.
    #[must_use]
    pub fn dated(id: i64, date: NaiveDate, content: impl Into<String>) -> Self {
        use chrono::Datelike;
        Self {
            id,
            date,
            day_month: DayMonth::from(date),
            year: date.year(),
            month: i32::try_from(date.month()).unwrap_or_default(),
            place: None,
            place_corrected: None,
            latitude: None,
            longitude: None,
            content: content.into(),
            words: TagList::default(),
        }
    }

    #[must_use]
    pub fn with_place(mut self, place: impl Into<String>, corrected: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self.place_corrected = Some(corrected.into());
        self
    }

    #[must_use]
    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    #[must_use]
    pub fn with_words(mut self, words: TagList) -> Self {
        self.words = words;
        self
    }

    /// Whether the stored `day_month` agrees with `date`.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.day_month == DayMonth::from(self.date)
    }
}

/// Article count for one calendar month across the selected years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCount {
    pub month: i32,
    pub article_count: i64,
}

/// Article count for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
    pub year: i32,
    pub article_count: i64,
}

/// Location of an entry for map placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub place_corrected: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dated_derives_projections() {
        let entry = Entry::dated(7, NaiveDate::from_ymd_opt(1920, 6, 15).unwrap(), "text");
        assert_eq!(entry.day_month.to_string(), "15-06");
        assert_eq!(entry.year, 1920);
        assert_eq!(entry.month, 6);
        assert!(entry.is_consistent());
    }

    #[test]
    fn json_uses_column_names_and_structured_words() {
        let entry = Entry::dated(1, NaiveDate::from_ymd_opt(1899, 12, 31).unwrap(), "x")
            .with_place("Kristiania", "Oslo")
            .with_words(TagList::parse("['ice', 'fjord']"));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["date"], "1899-12-31");
        assert_eq!(json["day_month"], "31-12");
        assert_eq!(json["place_corrected"], "Oslo");
        assert_eq!(json["words"], serde_json::json!(["ice", "fjord"]));
        assert!(json["latitude"].is_null());
    }
}
