use chrono::{Datelike, NaiveDate};

use super::dates::{add_days, is_sunday, validate_year, weekday_from_sunday, ymd};
use super::error::{invariant_failed, InvariantViolation, Result};

/// Calculates the First Sunday of Advent for a civil year.
///
/// The Fourth Sunday of Advent is the last Sunday strictly before Christmas;
/// Advent 1 is three weeks earlier. The result always lands between
/// November 27 and December 3.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lectio_core::calendar::calculate_advent1;
///
/// let advent1 = calculate_advent1(2025).unwrap();
/// assert_eq!(advent1, NaiveDate::from_ymd_opt(2025, 11, 30).unwrap());
/// ```
pub fn calculate_advent1(year: i32) -> Result<NaiveDate> {
    validate_year(year)?;

    let christmas = ymd(year, 12, 25)?;
    // A Sunday Christmas pushes the Fourth Sunday back a full week.
    let offset = match weekday_from_sunday(christmas) {
        0 => 7,
        weekday => weekday as i64,
    };
    let advent1 = add_days(christmas, -(21 + offset));

    check_advent1(advent1)?;
    Ok(advent1)
}

/// Asserts that `advent1` is a Sunday between November 27 and December 3.
pub fn check_advent1(advent1: NaiveDate) -> Result<()> {
    let earliest = ymd(advent1.year(), 11, 27)?;
    let latest = ymd(advent1.year(), 12, 3)?;

    if advent1 < earliest || advent1 > latest || !is_sunday(advent1) {
        return Err(invariant_failed(InvariantViolation::Advent1OutOfBounds(
            advent1,
        )));
    }
    Ok(())
}

/// Returns the four Sundays of Advent starting at `advent1`.
pub fn advent_sundays(advent1: NaiveDate) -> [NaiveDate; 4] {
    [
        advent1,
        add_days(advent1, 7),
        add_days(advent1, 14),
        add_days(advent1, 21),
    ]
}
