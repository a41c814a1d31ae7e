use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{AdventYear, LiturgicalColor, SeasonName, SeasonWindow};

/// A season window as a storage layer persists it, tagged with its year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeasonRow {
    pub advent_year: AdventYear,
    pub name: SeasonName,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub color: LiturgicalColor,
}

impl SeasonRow {
    /// Tags a computed window with the Advent year it belongs to.
    pub fn from_window(advent_year: AdventYear, window: &SeasonWindow) -> Self {
        Self {
            advent_year,
            name: window.name,
            start_date: window.start_date,
            end_date: window.end_date,
            color: window.color,
        }
    }

    /// Returns true if the row has the same season, bounds and color as `window`.
    pub fn matches(&self, window: &SeasonWindow) -> bool {
        self.name == window.name
            && self.start_date == window.start_date
            && self.end_date == window.end_date
            && self.color == window.color
    }
}
