//! Proper numbering of the Sundays of Ordinary Time.
//!
//! The first numbered Sunday is two weeks after Pentecost (Trinity Sunday,
//! one week after, is skipped) and carries Proper 2. Every following Sunday
//! up to, but not including, the next First Sunday of Advent takes the next
//! number. Reading lookups join on these numbers, so the anchor and the
//! starting number must never drift.

use chrono::NaiveDate;

use super::advent::calculate_advent1;
use super::dates::{add_days, is_sunday, sunday_on_or_before};
use super::easter::calculate_easter;
use super::error::{invariant_failed, InvariantViolation, Result};
use super::moveable::calculate_pentecost;
use super::seasons::advent_year_of;
use super::types::{AdventYear, OrdinaryTimeEntry};

/// Proper number carried by the first Sunday of Ordinary Time.
pub const FIRST_PROPER: u32 = 2;

/// Days from Pentecost to the first numbered Sunday.
pub const FIRST_PROPER_OFFSET: i64 = 14;

/// Enumerates the numbered Sundays of Ordinary Time in the liturgical year beginning in `year`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lectio_core::calendar::{get_ordinary_time_sundays, AdventYear};
///
/// let sundays = get_ordinary_time_sundays(AdventYear::new(2024).unwrap()).unwrap();
/// assert_eq!(sundays[0].date, NaiveDate::from_ymd_opt(2025, 6, 22).unwrap());
/// assert_eq!(sundays[0].proper_number, 2);
/// ```
pub fn get_ordinary_time_sundays(year: AdventYear) -> Result<Vec<OrdinaryTimeEntry>> {
    let easter = calculate_easter(year.liturgical().get())?;
    let pentecost = calculate_pentecost(easter);
    let next_advent1 = calculate_advent1(year.liturgical().get())?;

    let first = add_days(pentecost, FIRST_PROPER_OFFSET);
    let entries: Vec<OrdinaryTimeEntry> = (0..)
        .map(|week| add_days(first, 7 * week))
        .take_while(|date| *date < next_advent1)
        .zip(FIRST_PROPER..)
        .map(|(date, proper_number)| OrdinaryTimeEntry {
            date,
            proper_number,
        })
        .collect();

    check_propers(&entries, pentecost, next_advent1)?;
    Ok(entries)
}

/// Asserts the Proper sequence invariants for one liturgical year.
///
/// Entries must be Sundays seven days apart, numbered consecutively from
/// [`FIRST_PROPER`], starting two weeks after `pentecost`. The last entry
/// must be the Sunday right before `next_advent1`, so an empty or truncated
/// list fails.
pub fn check_propers(
    entries: &[OrdinaryTimeEntry],
    pentecost: NaiveDate,
    next_advent1: NaiveDate,
) -> Result<()> {
    let first_date = add_days(pentecost, FIRST_PROPER_OFFSET);
    let mut expected_date = first_date;
    let mut expected_number = FIRST_PROPER;

    for entry in entries {
        if entry.date != expected_date
            || entry.proper_number != expected_number
            || !is_sunday(entry.date)
            || entry.date >= next_advent1
        {
            return Err(invariant_failed(InvariantViolation::ProperSequence {
                date: entry.date,
            }));
        }
        expected_date = add_days(expected_date, 7);
        expected_number += 1;
    }

    if entries.is_empty() || expected_date != next_advent1 {
        let date = entries.last().map_or(first_date, |entry| entry.date);
        return Err(invariant_failed(InvariantViolation::ProperSequence { date }));
    }

    Ok(())
}

/// Returns the Proper number governing `date`, if any.
///
/// Weekdays take the number of the Sunday that begins their week. Dates
/// outside the numbered span of Ordinary Time return `None`.
pub fn get_proper_for_date(date: NaiveDate) -> Result<Option<u32>> {
    let year = advent_year_of(date)?;
    let sunday = sunday_on_or_before(date);

    Ok(get_ordinary_time_sundays(year)?
        .into_iter()
        .find(|entry| entry.date == sunday)
        .map(|entry| entry.proper_number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::error::EngineError;
    use proptest::prelude::*;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn advent(year: i32) -> AdventYear {
        AdventYear::new(year).unwrap()
    }

    #[test]
    fn test_sundays_for_2025() {
        // Pentecost 2025-06-08, Trinity 06-15, next Advent 1 2025-11-30.
        let sundays = get_ordinary_time_sundays(advent(2024)).unwrap();

        let first = sundays.first().unwrap();
        let last = sundays.last().unwrap();
        assert_eq!(first.date, make_date(2025, 6, 22));
        assert_eq!(first.proper_number, 2);
        assert_eq!(last.date, make_date(2025, 11, 23));
        assert_eq!(last.proper_number, 24);
        assert_eq!(sundays.len(), 23);
    }

    #[test]
    fn test_trinity_sunday_is_not_numbered() {
        let sundays = get_ordinary_time_sundays(advent(2024)).unwrap();
        assert!(sundays.iter().all(|s| s.date != make_date(2025, 6, 15)));
    }

    #[test]
    fn test_get_proper_for_date() {
        // Sunday
        assert_eq!(get_proper_for_date(make_date(2025, 6, 22)).unwrap(), Some(2));
        // Wednesday of that week
        assert_eq!(get_proper_for_date(make_date(2025, 6, 25)).unwrap(), Some(2));
        // Saturday before Advent 1
        assert_eq!(get_proper_for_date(make_date(2025, 11, 29)).unwrap(), Some(24));
        // Trinity Sunday and Advent carry no Proper
        assert_eq!(get_proper_for_date(make_date(2025, 6, 15)).unwrap(), None);
        assert_eq!(get_proper_for_date(make_date(2025, 12, 7)).unwrap(), None);
    }

    #[test]
    fn test_check_propers_detects_drift() {
        let pentecost = make_date(2025, 6, 8);
        let next_advent1 = make_date(2025, 11, 30);

        let shifted_number = [OrdinaryTimeEntry {
            date: make_date(2025, 6, 22),
            proper_number: 3,
        }];
        assert!(matches!(
            check_propers(&shifted_number, pentecost, next_advent1),
            Err(EngineError::Invariant(InvariantViolation::ProperSequence { .. }))
        ));

        let shifted_anchor = [OrdinaryTimeEntry {
            date: make_date(2025, 6, 15),
            proper_number: 2,
        }];
        assert!(check_propers(&shifted_anchor, pentecost, next_advent1).is_err());
    }

    #[test]
    fn test_check_propers_detects_missing_sundays() {
        let pentecost = make_date(2025, 6, 8);
        let next_advent1 = make_date(2025, 11, 30);
        let sundays = get_ordinary_time_sundays(advent(2024)).unwrap();

        assert!(check_propers(&sundays, pentecost, next_advent1).is_ok());
        assert_eq!(
            check_propers(&[], pentecost, next_advent1),
            Err(EngineError::Invariant(InvariantViolation::ProperSequence {
                date: make_date(2025, 6, 22),
            }))
        );
        assert_eq!(
            check_propers(&sundays[..3], pentecost, next_advent1),
            Err(EngineError::Invariant(InvariantViolation::ProperSequence {
                date: make_date(2025, 7, 6),
            }))
        );
    }

    proptest! {
        #[test]
        fn prop_proper_sequence(year in 1900..=2100i32) {
            let sundays = get_ordinary_time_sundays(advent(year)).unwrap();
            let pentecost = calculate_pentecost(calculate_easter(year + 1).unwrap());
            let next_advent1 = calculate_advent1(year + 1).unwrap();

            prop_assert!(!sundays.is_empty());
            prop_assert_eq!(sundays[0].proper_number, 2);
            prop_assert!(sundays[0].date >= add_days(pentecost, 14));
            for entry in &sundays {
                prop_assert!(is_sunday(entry.date));
                prop_assert!(entry.date <= add_days(next_advent1, -1));
            }
            for pair in sundays.windows(2) {
                prop_assert_eq!((pair[1].date - pair[0].date).num_days(), 7);
                prop_assert_eq!(pair[1].proper_number, pair[0].proper_number + 1);
            }
            // The last numbered Sunday is the one right before Advent.
            prop_assert_eq!(add_days(sundays[sundays.len() - 1].date, 7), next_advent1);
        }
    }
}
