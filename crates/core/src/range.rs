use serde::{Deserialize, Serialize};

/// Inclusive year bounds, each side optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub from: Option<i32>,
    pub to: Option<i32>,
}

impl YearRange {
    #[must_use]
    pub const fn new(from: Option<i32>, to: Option<i32>) -> Self {
        Self { from, to }
    }

    #[must_use]
    pub const fn unbounded() -> Self {
        Self { from: None, to: None }
    }

    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    #[must_use]
    pub fn contains(&self, year: i32) -> bool {
        self.from.is_none_or(|from| year >= from) && self.to.is_none_or(|to| year <= to)
    }
}
