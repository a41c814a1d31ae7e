//! Civil date primitives shared by every calculator.
//!
//! All engine dates are `chrono::NaiveDate` values: proleptic Gregorian, no
//! time of day, no timezone. Derived dates are always produced by adding a
//! day count to a base value, never by mutating one.
//!
//! The weekday convention is fixed here and nowhere else: `0` is Sunday,
//! `6` is Saturday.

use chrono::{Datelike, Duration, NaiveDate};

use super::error::{invariant_failed, EngineError, InvariantViolation, Result};

/// First year the Computus (and therefore the engine) accepts.
pub const MIN_YEAR: i32 = 1583;

/// Last year the Computus (and therefore the engine) accepts.
pub const MAX_YEAR: i32 = 4099;

/// Rejects years outside `MIN_YEAR..=MAX_YEAR`.
pub fn validate_year(year: i32) -> Result<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(EngineError::YearOutOfRange {
            year,
            min: MIN_YEAR,
            max: MAX_YEAR,
        })
    }
}

/// Builds a date that is known to exist for every year in the engine's range.
///
/// Callers must only pass (month, day) pairs that exist in every year
/// (February 29 is never used) and a year that passed [`validate_year`].
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| invariant_failed(InvariantViolation::NonexistentDate { year, month, day }))
}

/// Returns the weekday of `date` numbered from Sunday (0) to Saturday (6).
pub fn weekday_from_sunday(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Returns true if `date` falls on a Sunday.
pub fn is_sunday(date: NaiveDate) -> bool {
    weekday_from_sunday(date) == 0
}

/// Returns a new date `days` days after `date` (negative values go back).
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Returns the number of days from `start` to `end` (negative if `end` is earlier).
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Returns the first Sunday strictly after `date`.
pub fn next_sunday_after(date: NaiveDate) -> NaiveDate {
    add_days(date, 7 - weekday_from_sunday(date) as i64)
}

/// Returns the most recent Sunday on or before `date`.
pub fn sunday_on_or_before(date: NaiveDate) -> NaiveDate {
    add_days(date, -(weekday_from_sunday(date) as i64))
}
