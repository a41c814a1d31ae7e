//! Regeneration-based repair of persisted season rows.
//!
//! The engine is the source of truth for season windows. A storage layer
//! hands over whatever rows it holds for a year; the diff tells it which
//! rows to insert and which to delete. Applying the diff and diffing again
//! yields an empty result.

use serde::{Deserialize, Serialize};

use super::types::SeasonRow;
use crate::calendar::{calculate_seasons, AdventYear, Result};

/// What a storage layer must change to match the engine for one year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonDiff {
    /// Computed windows with no matching persisted row.
    pub missing: Vec<SeasonRow>,
    /// Persisted rows for the year that match no computed window.
    pub stale: Vec<SeasonRow>,
}

impl SeasonDiff {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.stale.is_empty()
    }
}

/// Compares persisted rows against a fresh season tiling of `year`.
///
/// Rows tagged with other years are ignored.
pub fn diff_seasons(existing: &[SeasonRow], year: AdventYear) -> Result<SeasonDiff> {
    let windows = calculate_seasons(year)?;
    let for_year: Vec<&SeasonRow> = existing
        .iter()
        .filter(|row| row.advent_year == year)
        .collect();

    let missing: Vec<SeasonRow> = windows
        .iter()
        .filter(|window| !for_year.iter().any(|row| row.matches(window)))
        .map(|window| SeasonRow::from_window(year, window))
        .collect();

    let stale: Vec<SeasonRow> = for_year
        .into_iter()
        .filter(|row| !windows.iter().any(|window| row.matches(window)))
        .copied()
        .collect();

    if !stale.is_empty() {
        tracing::warn!(
            advent_year = year.get(),
            stale = stale.len(),
            "persisted season rows disagree with computed seasons"
        );
    }

    Ok(SeasonDiff { missing, stale })
}

/// Returns the season rows of `year` that are absent from `existing`.
pub fn missing_seasons(existing: &[SeasonRow], year: AdventYear) -> Result<Vec<SeasonRow>> {
    Ok(diff_seasons(existing, year)?.missing)
}
