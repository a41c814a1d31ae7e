//! Composition of every calculator into one immutable liturgical year.
//!
//! This is the entry point consuming services call. A [`LiturgicalYear`] is
//! a pure function of its [`AdventYear`]: generating the same year twice
//! always yields equal values, so callers may regenerate or cache freely.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::advent::{advent_sundays, calculate_advent1};
use super::cycle::get_liturgical_cycle;
use super::dates::{add_days, next_sunday_after, sunday_on_or_before, ymd};
use super::easter::calculate_easter;
use super::error::{invariant_failed, EngineError, InvariantViolation, Result};
use super::fixed::calculate_fixed_feasts;
use super::moveable::MoveableFeasts;
use super::propers::get_ordinary_time_sundays;
use super::seasons::calculate_seasons;
use super::types::{
    AdventYear, Cycle, FeastRank, LiturgicalColor, LiturgicalDate, LiturgicalYearNumber,
    OrdinaryTimeEntry, SeasonWindow,
};

/// A fully computed liturgical year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiturgicalYear {
    /// Name of the year: the civil year in which it ends.
    pub year: LiturgicalYearNumber,
    pub cycle: Cycle,
    pub advent1: NaiveDate,
    pub christmas: NaiveDate,
    pub epiphany: NaiveDate,
    pub ash_wednesday: NaiveDate,
    pub palm_sunday: NaiveDate,
    pub easter: NaiveDate,
    pub pentecost: NaiveDate,
    pub seasons: [SeasonWindow; 6],
    pub moveable_feasts: MoveableFeasts,
    pub ordinary_time: Vec<OrdinaryTimeEntry>,
}

/// Generates the liturgical year that begins with Advent in `advent_year`.
///
/// The result is named by the following civil year: Advent 2025 opens
/// liturgical year 2026.
///
/// # Examples
///
/// ```
/// use chrono::Datelike;
/// use lectio_core::calendar::{generate_liturgical_year, AdventYear, Cycle};
///
/// let year = generate_liturgical_year(AdventYear::new(2025).unwrap()).unwrap();
/// assert_eq!(year.year.get(), 2026);
/// assert_eq!(year.advent1.year(), 2025);
/// assert_eq!(year.cycle, Cycle::A);
/// ```
pub fn generate_liturgical_year(advent_year: AdventYear) -> Result<LiturgicalYear> {
    let year = advent_year.liturgical();

    let advent1 = calculate_advent1(advent_year.get())?;
    let easter = calculate_easter(year.get())?;
    let moveable_feasts = MoveableFeasts::from_easter(easter)?;
    let seasons = calculate_seasons(advent_year)?;
    let ordinary_time = get_ordinary_time_sundays(advent_year)?;
    let cycle = get_liturgical_cycle(year);

    let liturgical_year = LiturgicalYear {
        year,
        cycle,
        advent1,
        christmas: ymd(advent_year.get(), 12, 25)?,
        epiphany: ymd(year.get(), 1, 6)?,
        ash_wednesday: moveable_feasts.ash_wednesday,
        palm_sunday: moveable_feasts.palm_sunday,
        easter,
        pentecost: moveable_feasts.pentecost,
        seasons,
        moveable_feasts,
        ordinary_time,
    };

    check_year_name(&liturgical_year)?;

    tracing::debug!(
        advent_year = advent_year.get(),
        liturgical_year = year.get(),
        %cycle,
        %easter,
        "generated liturgical year"
    );

    Ok(liturgical_year)
}

/// Asserts `year == advent1.year + 1`.
pub fn check_year_name(year: &LiturgicalYear) -> Result<()> {
    if year.year.get() != year.advent1.year() + 1 {
        return Err(invariant_failed(InvariantViolation::YearNameOffset {
            year: year.year.get(),
            advent1_year: year.advent1.year(),
        }));
    }
    Ok(())
}

impl LiturgicalYear {
    /// The Advent year this liturgical year begins in.
    pub fn advent_year(&self) -> AdventYear {
        self.year.advent()
    }

    /// First day of the following liturgical year.
    pub fn next_advent1(&self) -> NaiveDate {
        add_days(self.seasons[5].end_date, 1)
    }

    /// Returns true if `date` belongs to this liturgical year.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.advent1 <= date && date < self.next_advent1()
    }

    /// Returns the season window containing `date`.
    pub fn season_for(&self, date: NaiveDate) -> Result<SeasonWindow> {
        self.seasons
            .iter()
            .find(|window| window.contains(date))
            .copied()
            .ok_or(EngineError::DateOutOfRange {
                date,
                advent_year: self.advent_year().get(),
            })
    }

    /// Returns the Proper number governing `date`, if it falls in numbered Ordinary Time.
    pub fn proper_for(&self, date: NaiveDate) -> Result<Option<u32>> {
        if !self.contains(date) {
            return Err(EngineError::DateOutOfRange {
                date,
                advent_year: self.advent_year().get(),
            });
        }
        let sunday = sunday_on_or_before(date);
        Ok(self
            .ordinary_time
            .iter()
            .find(|entry| entry.date == sunday)
            .map(|entry| entry.proper_number))
    }

    /// Lists every named day of the year, sorted by date and then by rank.
    pub fn observances(&self) -> Result<Vec<LiturgicalDate>> {
        let mut days = Vec::new();
        let mut push = |date: NaiveDate,
                        name: String,
                        rank: FeastRank,
                        color: LiturgicalColor,
                        is_moveable: bool|
         -> Result<()> {
            let season = self.season_for(date)?.name;
            days.push(LiturgicalDate {
                date,
                name,
                season,
                color,
                rank,
                is_moveable,
            });
            Ok(())
        };

        let next_advent1 = self.next_advent1();
        let ordinals = ["First", "Second", "Third", "Fourth"];
        for (ordinal, sunday) in ordinals.iter().zip(advent_sundays(self.advent1)) {
            let color = if *ordinal == "Third" {
                LiturgicalColor::Rose
            } else {
                LiturgicalColor::Purple
            };
            push(
                sunday,
                format!("{} Sunday of Advent", ordinal),
                FeastRank::Feast,
                color,
                true,
            )?;
        }

        for civil_year in [self.advent1.year(), self.year.get()] {
            for feast in calculate_fixed_feasts(civil_year)? {
                if self.advent1 <= feast.date && feast.date < next_advent1 {
                    push(feast.date, feast.name, feast.rank, feast.color, false)?;
                }
            }
        }

        let feasts = &self.moveable_feasts;
        let moveable = [
            (
                next_sunday_after(self.epiphany),
                "Baptism of the Lord",
                FeastRank::Feast,
                LiturgicalColor::White,
            ),
            (
                add_days(feasts.ash_wednesday, -3),
                "Transfiguration Sunday",
                FeastRank::Feast,
                LiturgicalColor::White,
            ),
            (
                feasts.ash_wednesday,
                "Ash Wednesday",
                FeastRank::Feast,
                LiturgicalColor::Purple,
            ),
            (
                add_days(feasts.easter, -21),
                "Fourth Sunday in Lent",
                FeastRank::Feast,
                LiturgicalColor::Rose,
            ),
            (
                feasts.palm_sunday,
                "Palm Sunday",
                FeastRank::Feast,
                LiturgicalColor::Red,
            ),
            (
                feasts.maundy_thursday,
                "Maundy Thursday",
                FeastRank::Feast,
                LiturgicalColor::White,
            ),
            (
                feasts.good_friday,
                "Good Friday",
                FeastRank::Feast,
                LiturgicalColor::Black,
            ),
            (
                feasts.holy_saturday,
                "Holy Saturday",
                FeastRank::Commemoration,
                LiturgicalColor::Purple,
            ),
            (
                feasts.easter,
                "Easter Day",
                FeastRank::PrincipalFeast,
                LiturgicalColor::Gold,
            ),
            (
                feasts.ascension,
                "Ascension Day",
                FeastRank::PrincipalFeast,
                LiturgicalColor::White,
            ),
            (
                feasts.pentecost,
                "Day of Pentecost",
                FeastRank::PrincipalFeast,
                LiturgicalColor::Red,
            ),
            (
                feasts.trinity_sunday,
                "Trinity Sunday",
                FeastRank::PrincipalFeast,
                LiturgicalColor::White,
            ),
            (
                add_days(next_advent1, -7),
                "Christ the King",
                FeastRank::Feast,
                LiturgicalColor::White,
            ),
        ];
        for (date, name, rank, color) in moveable {
            push(date, name.to_string(), rank, color, true)?;
        }

        for entry in &self.ordinary_time {
            push(
                entry.date,
                format!("Proper {}", entry.proper_number),
                FeastRank::Ordinary,
                LiturgicalColor::Green,
                true,
            )?;
        }

        days.sort_by(|a, b| a.date.cmp(&b.date).then(a.rank.cmp(&b.rank)));
        Ok(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::types::SeasonName;
    use proptest::prelude::*;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn generate(year: i32) -> LiturgicalYear {
        generate_liturgical_year(AdventYear::new(year).unwrap()).unwrap()
    }

    #[test]
    fn test_year_is_named_by_ending_civil_year() {
        let year = generate(2025);

        assert_eq!(year.year.get(), 2026);
        assert_eq!(year.advent1.year(), 2025);
        assert_eq!(year.advent1, make_date(2025, 11, 30));
        assert_eq!(year.cycle, Cycle::A);
    }

    #[test]
    fn test_easter_comes_from_the_following_civil_year() {
        let year = generate(2024);

        assert_eq!(year.year.get(), 2025);
        assert_eq!(year.easter, make_date(2025, 4, 20));
        assert_eq!(year.ash_wednesday, make_date(2025, 3, 5));
        assert_eq!(year.palm_sunday, make_date(2025, 4, 13));
        assert_eq!(year.pentecost, make_date(2025, 6, 8));
        assert_eq!(year.christmas, make_date(2024, 12, 25));
        assert_eq!(year.epiphany, make_date(2025, 1, 6));
        assert_eq!(year.cycle, Cycle::C);
        assert_eq!(year.next_advent1(), make_date(2025, 11, 30));
    }

    #[test]
    fn test_check_year_name_rejects_offset() {
        let mut year = generate(2025);
        year.year = LiturgicalYearNumber::new(2025).unwrap();

        assert_eq!(
            check_year_name(&year),
            Err(EngineError::Invariant(InvariantViolation::YearNameOffset {
                year: 2025,
                advent1_year: 2025
            }))
        );
    }

    #[test]
    fn test_generation_is_reproducible() {
        assert_eq!(generate(2031), generate(2031));
    }

    #[test]
    fn test_season_and_proper_lookup() {
        let year = generate(2024);

        let window = year.season_for(make_date(2025, 7, 4)).unwrap();
        assert_eq!(window.name, SeasonName::OrdinaryTime);
        assert_eq!(year.proper_for(make_date(2025, 7, 4)).unwrap(), Some(3));
        assert_eq!(year.proper_for(make_date(2025, 3, 9)).unwrap(), None);
        assert!(year.proper_for(make_date(2025, 12, 1)).is_err());
        assert!(year.season_for(make_date(2024, 11, 30)).is_err());
    }

    #[test]
    fn test_observances() {
        let year = generate(2024);
        let days = year.observances().unwrap();

        let find = |name: &str| days.iter().find(|d| d.name == name).unwrap();

        let gaudete = find("Third Sunday of Advent");
        assert_eq!(gaudete.date, make_date(2024, 12, 15));
        assert_eq!(gaudete.color, LiturgicalColor::Rose);
        assert_eq!(gaudete.season, SeasonName::Advent);

        let easter = find("Easter Day");
        assert_eq!(easter.rank, FeastRank::PrincipalFeast);
        assert_eq!(easter.season, SeasonName::Easter);
        assert!(easter.is_moveable);

        let christmas = find("Christmas");
        assert_eq!(christmas.date, make_date(2024, 12, 25));
        assert!(!christmas.is_moveable);

        let all_saints = find("All Saints");
        assert_eq!(all_saints.date, make_date(2025, 11, 1));
        assert_eq!(all_saints.season, SeasonName::OrdinaryTime);

        assert_eq!(find("Baptism of the Lord").date, make_date(2025, 1, 12));
        assert_eq!(find("Transfiguration Sunday").date, make_date(2025, 3, 2));
        assert_eq!(find("Christ the King").date, make_date(2025, 11, 23));
        assert_eq!(find("Proper 2").date, make_date(2025, 6, 22));

        // Christmas 2025 belongs to the next liturgical year.
        assert!(days
            .iter()
            .all(|d| d.date >= year.advent1 && d.date < year.next_advent1()));
        assert!(days.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn test_observances_order_by_rank_on_shared_date() {
        let year = generate(2024);
        let days = year.observances().unwrap();
        let last_sunday: Vec<&LiturgicalDate> = days
            .iter()
            .filter(|d| d.date == make_date(2025, 11, 23))
            .collect();

        assert_eq!(last_sunday[0].name, "Christ the King");
        assert_eq!(last_sunday[1].name, "Proper 24");
    }

    proptest! {
        #[test]
        fn prop_year_name_offset(year in 1583..=4098i32) {
            let liturgical = generate(year);
            prop_assert_eq!(liturgical.year.get(), liturgical.advent1.year() + 1);
            prop_assert_eq!(liturgical.advent_year().get(), year);
        }

        #[test]
        fn prop_observances_fall_inside_year(year in 1900..=2100i32) {
            let liturgical = generate(year);
            for day in liturgical.observances().unwrap() {
                prop_assert!(liturgical.contains(day.date));
                prop_assert_eq!(liturgical.season_for(day.date).unwrap().name, day.season);
            }
        }
    }
}
