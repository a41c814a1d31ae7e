//! Season tiling of a liturgical year.
//!
//! A liturgical year is split into six windows that cover every day from
//! the First Sunday of Advent up to the day before the next one:
//!
//! | Season        | Start                 | End (inclusive)            |
//! |---------------|-----------------------|----------------------------|
//! | Advent        | Advent 1              | December 24                |
//! | Christmas     | December 25           | January 5                  |
//! | Epiphany      | January 6             | day before Ash Wednesday   |
//! | Lent          | Ash Wednesday         | Holy Saturday              |
//! | Easter        | Easter Sunday         | Pentecost                  |
//! | Ordinary Time | day after Pentecost   | day before next Advent 1   |
//!
//! Each window ends the day before the next one starts. The tiling is
//! checked after it is built, so a bad boundary is reported instead of
//! leaving a gap.

use chrono::{Datelike, NaiveDate};

use super::advent::calculate_advent1;
use super::dates::{add_days, ymd};
use super::easter::calculate_easter;
use super::error::{invariant_failed, EngineError, InvariantViolation, Result};
use super::moveable::{calculate_ash_wednesday, calculate_pentecost};
use super::types::{AdventYear, SeasonName, SeasonWindow};

/// Builds the six season windows of the liturgical year beginning in `year`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lectio_core::calendar::{calculate_seasons, AdventYear, SeasonName};
///
/// let seasons = calculate_seasons(AdventYear::new(2024).unwrap()).unwrap();
/// assert_eq!(seasons[3].name, SeasonName::Lent);
/// assert_eq!(seasons[3].start_date, NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
/// ```
pub fn calculate_seasons(year: AdventYear) -> Result<[SeasonWindow; 6]> {
    let advent_year = year.get();
    let easter_year = year.liturgical().get();

    let advent1 = calculate_advent1(advent_year)?;
    let christmas = ymd(advent_year, 12, 25)?;
    let epiphany = ymd(easter_year, 1, 6)?;
    let easter = calculate_easter(easter_year)?;
    let ash_wednesday = calculate_ash_wednesday(easter)?;
    let pentecost = calculate_pentecost(easter);
    let next_advent1 = calculate_advent1(easter_year)?;

    let seasons = [
        SeasonWindow::new(SeasonName::Advent, advent1, add_days(christmas, -1)),
        SeasonWindow::new(SeasonName::Christmas, christmas, add_days(epiphany, -1)),
        SeasonWindow::new(SeasonName::Epiphany, epiphany, add_days(ash_wednesday, -1)),
        SeasonWindow::new(SeasonName::Lent, ash_wednesday, add_days(easter, -1)),
        SeasonWindow::new(SeasonName::Easter, easter, pentecost),
        SeasonWindow::new(
            SeasonName::OrdinaryTime,
            add_days(pentecost, 1),
            add_days(next_advent1, -1),
        ),
    ];

    check_tiling(&seasons, advent1, add_days(next_advent1, -1))?;
    Ok(seasons)
}

/// Asserts that `seasons` cover `start..=end` exactly, in order, with no gap or overlap.
pub fn check_tiling(seasons: &[SeasonWindow], start: NaiveDate, end: NaiveDate) -> Result<()> {
    let (first, last) = match (seasons.first(), seasons.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(invariant_failed(InvariantViolation::SeasonBounds {
                start,
                end: add_days(start, -1),
                expected_start: start,
                expected_end: end,
            }))
        }
    };

    if first.start_date != start || last.end_date != end {
        return Err(invariant_failed(InvariantViolation::SeasonBounds {
            start: first.start_date,
            end: last.end_date,
            expected_start: start,
            expected_end: end,
        }));
    }

    for window in seasons {
        if window.end_date < window.start_date {
            return Err(invariant_failed(InvariantViolation::SeasonInverted {
                season: window.name.to_string(),
                start: window.start_date,
                end: window.end_date,
            }));
        }
    }

    for pair in seasons.windows(2) {
        let (previous, next) = (&pair[0], &pair[1]);
        if add_days(previous.end_date, 1) != next.start_date {
            return Err(invariant_failed(InvariantViolation::SeasonGap {
                previous: previous.name.to_string(),
                end: previous.end_date,
                next: next.name.to_string(),
                start: next.start_date,
            }));
        }
    }

    Ok(())
}

/// Returns the Advent year whose liturgical year contains `date`.
pub fn advent_year_of(date: NaiveDate) -> Result<AdventYear> {
    let advent1 = calculate_advent1(date.year())?;
    if date >= advent1 {
        AdventYear::new(date.year())
    } else {
        AdventYear::new(date.year() - 1)
    }
}

/// Returns the season window of the liturgical year beginning in `year` that contains `date`.
pub fn get_season_for_date(date: NaiveDate, year: AdventYear) -> Result<SeasonWindow> {
    calculate_seasons(year)?
        .into_iter()
        .find(|window| window.contains(date))
        .ok_or(EngineError::DateOutOfRange {
            date,
            advent_year: year.get(),
        })
}

/// Returns the season window containing `date`, inferring its liturgical year.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lectio_core::calendar::{season_for_date, SeasonName};
///
/// let date = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
/// assert_eq!(season_for_date(date).unwrap().name, SeasonName::Advent);
/// ```
pub fn season_for_date(date: NaiveDate) -> Result<SeasonWindow> {
    get_season_for_date(date, advent_year_of(date)?)
}
