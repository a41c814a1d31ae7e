//! Easter-relative feast dates.
//!
//! Every date here is a fixed day offset from Easter Sunday. Because Easter
//! is always a Sunday, the offsets land on the right weekday by
//! construction; the only weekday check performed is an assertion that
//! Ash Wednesday really is a Wednesday.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dates::{add_days, weekday_from_sunday};
use super::easter::check_easter;
use super::error::{invariant_failed, InvariantViolation, Result};

pub const ASH_WEDNESDAY_OFFSET: i64 = -46;
pub const PALM_SUNDAY_OFFSET: i64 = -7;
pub const MAUNDY_THURSDAY_OFFSET: i64 = -3;
pub const GOOD_FRIDAY_OFFSET: i64 = -2;
pub const HOLY_SATURDAY_OFFSET: i64 = -1;
pub const ASCENSION_OFFSET: i64 = 39;
pub const PENTECOST_OFFSET: i64 = 49;
pub const TRINITY_SUNDAY_OFFSET: i64 = 56;

/// Returns Ash Wednesday, failing loudly if the offset ever misses a Wednesday.
pub fn calculate_ash_wednesday(easter: NaiveDate) -> Result<NaiveDate> {
    let ash_wednesday = add_days(easter, ASH_WEDNESDAY_OFFSET);
    if weekday_from_sunday(ash_wednesday) != 3 {
        return Err(invariant_failed(
            InvariantViolation::AshWednesdayNotWednesday(ash_wednesday),
        ));
    }
    Ok(ash_wednesday)
}

pub fn calculate_palm_sunday(easter: NaiveDate) -> NaiveDate {
    add_days(easter, PALM_SUNDAY_OFFSET)
}

pub fn calculate_maundy_thursday(easter: NaiveDate) -> NaiveDate {
    add_days(easter, MAUNDY_THURSDAY_OFFSET)
}

pub fn calculate_good_friday(easter: NaiveDate) -> NaiveDate {
    add_days(easter, GOOD_FRIDAY_OFFSET)
}

pub fn calculate_holy_saturday(easter: NaiveDate) -> NaiveDate {
    add_days(easter, HOLY_SATURDAY_OFFSET)
}

pub fn calculate_ascension(easter: NaiveDate) -> NaiveDate {
    add_days(easter, ASCENSION_OFFSET)
}

pub fn calculate_pentecost(easter: NaiveDate) -> NaiveDate {
    add_days(easter, PENTECOST_OFFSET)
}

/// Trinity Sunday is the Sunday after Pentecost.
pub fn calculate_trinity_sunday(easter: NaiveDate) -> NaiveDate {
    add_days(easter, TRINITY_SUNDAY_OFFSET)
}

/// All Easter-dependent dates of one civil year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveableFeasts {
    pub ash_wednesday: NaiveDate,
    pub palm_sunday: NaiveDate,
    pub maundy_thursday: NaiveDate,
    pub good_friday: NaiveDate,
    pub holy_saturday: NaiveDate,
    pub easter: NaiveDate,
    pub ascension: NaiveDate,
    pub pentecost: NaiveDate,
    pub trinity_sunday: NaiveDate,
}

impl MoveableFeasts {
    /// Derives every moveable feast from an Easter date.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use lectio_core::calendar::MoveableFeasts;
    ///
    /// let easter = NaiveDate::from_ymd_opt(2025, 4, 20).unwrap();
    /// let feasts = MoveableFeasts::from_easter(easter).unwrap();
    /// assert_eq!(feasts.ash_wednesday, NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
    /// assert_eq!(feasts.pentecost, NaiveDate::from_ymd_opt(2025, 6, 8).unwrap());
    /// ```
    pub fn from_easter(easter: NaiveDate) -> Result<Self> {
        check_easter(easter)?;
        Ok(Self {
            ash_wednesday: calculate_ash_wednesday(easter)?,
            palm_sunday: calculate_palm_sunday(easter),
            maundy_thursday: calculate_maundy_thursday(easter),
            good_friday: calculate_good_friday(easter),
            holy_saturday: calculate_holy_saturday(easter),
            easter,
            ascension: calculate_ascension(easter),
            pentecost: calculate_pentecost(easter),
            trinity_sunday: calculate_trinity_sunday(easter),
        })
    }
}
