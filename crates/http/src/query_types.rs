//! Request/query types (Deserialize)
//!
//! Every field is optional at the extractor level so a missing parameter
//! reaches the service and gets the endpoint's own 400 message.

use historical_news_core::YearRange;
use historical_news_service::params::parse_year_range;
use historical_news_service::ServiceError;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct TagQuery {
    pub tag: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EntryQuery {
    pub id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CityQuery {
    pub city: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRangeQuery {
    pub year_from: Option<String>,
    pub year_to: Option<String>,
}

impl YearRangeQuery {
    pub fn range(&self) -> Result<YearRange, ServiceError> {
        parse_year_range(self.year_from.as_deref(), self.year_to.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthArticlesQuery {
    pub month: Option<String>,
    pub year_from: Option<String>,
    pub year_to: Option<String>,
}

impl MonthArticlesQuery {
    pub fn range(&self) -> Result<YearRange, ServiceError> {
        parse_year_range(self.year_from.as_deref(), self.year_to.as_deref())
    }
}
