//! Western (Gregorian) Computus.

use chrono::{Datelike, NaiveDate};

use super::dates::{is_sunday, validate_year, ymd};
use super::error::{invariant_failed, InvariantViolation, Result};

/// Calculates Easter Sunday for a Gregorian civil year.
///
/// Uses the anonymous Gregorian algorithm (Meeus/Jones/Butcher), which is
/// valid for 1583..=4099. Years outside that range are rejected.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lectio_core::calendar::calculate_easter;
///
/// let easter = calculate_easter(2025).unwrap();
/// assert_eq!(easter, NaiveDate::from_ymd_opt(2025, 4, 20).unwrap());
/// assert!(calculate_easter(1500).is_err());
/// ```
pub fn calculate_easter(year: i32) -> Result<NaiveDate> {
    validate_year(year)?;

    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    let easter = ymd(year, month as u32, day as u32)?;
    check_easter(easter)?;
    Ok(easter)
}

/// Asserts that `easter` is a Sunday between March 22 and April 25.
pub fn check_easter(easter: NaiveDate) -> Result<()> {
    let earliest = ymd(easter.year(), 3, 22)?;
    let latest = ymd(easter.year(), 4, 25)?;

    if easter < earliest || easter > latest {
        return Err(invariant_failed(InvariantViolation::EasterOutOfBounds(easter)));
    }
    if !is_sunday(easter) {
        return Err(invariant_failed(InvariantViolation::EasterNotSunday(easter)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::error::EngineError;
    use proptest::prelude::*;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_known_easter_dates() {
        let cases = [
            (1583, 4, 10),
            (1818, 3, 22), // earliest possible
            (1943, 4, 25), // latest possible
            (2000, 4, 23),
            (2008, 3, 23),
            (2011, 4, 24),
            (2019, 4, 21),
            (2024, 3, 31),
            (2025, 4, 20),
            (2026, 4, 5),
            (2038, 4, 25),
            (2285, 3, 22),
            (4099, 4, 19),
        ];

        for (year, month, day) in cases {
            assert_eq!(
                calculate_easter(year).unwrap(),
                make_date(year, month, day),
                "Easter {}",
                year
            );
        }
    }

    #[test]
    fn test_leap_year_sensitivity() {
        // Century years that are not leap years shift the epact.
        assert_eq!(calculate_easter(1900).unwrap(), make_date(1900, 4, 15));
        assert_eq!(calculate_easter(2100).unwrap(), make_date(2100, 3, 28));
    }

    #[test]
    fn test_domain_errors() {
        assert_eq!(
            calculate_easter(1582),
            Err(EngineError::YearOutOfRange {
                year: 1582,
                min: 1583,
                max: 4099
            })
        );
        assert!(calculate_easter(4100).is_err());
        assert!(calculate_easter(-1).is_err());
    }

    #[test]
    fn test_check_easter_rejects_bad_dates() {
        assert!(matches!(
            check_easter(make_date(2025, 3, 16)),
            Err(EngineError::Invariant(InvariantViolation::EasterOutOfBounds(_)))
        ));
        assert!(matches!(
            check_easter(make_date(2025, 4, 21)),
            Err(EngineError::Invariant(InvariantViolation::EasterNotSunday(_)))
        ));
    }

    proptest! {
        #[test]
        fn prop_easter_within_bounds(year in 1900..=2100i32) {
            let easter = calculate_easter(year).unwrap();
            prop_assert_eq!(easter.year(), year);
            prop_assert!(easter >= make_date(year, 3, 22));
            prop_assert!(easter <= make_date(year, 4, 25));
            prop_assert!(is_sunday(easter));
        }

        #[test]
        fn prop_easter_defined_across_domain(year in 1583..=4099i32) {
            prop_assert!(calculate_easter(year).is_ok());
        }
    }
}
