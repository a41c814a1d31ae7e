use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dates::{MAX_YEAR, MIN_YEAR};
use super::error::{EngineError, Result};

/// The civil year in which the First Sunday of Advent falls.
///
/// A liturgical year begins in Advent of one civil year and is *named* by the
/// following civil year. `AdventYear` and [`LiturgicalYearNumber`] keep the
/// two apart; converting between them is always explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct AdventYear(i32);

impl AdventYear {
    /// Smallest Advent year whose liturgical year has a computable Easter.
    pub const MIN: i32 = MIN_YEAR;
    /// Largest Advent year whose liturgical year has a computable Easter.
    pub const MAX: i32 = MAX_YEAR - 1;

    /// Creates an Advent year, rejecting years outside the engine's range.
    pub fn new(year: i32) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&year) {
            Ok(Self(year))
        } else {
            Err(EngineError::YearOutOfRange {
                year,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    pub fn get(self) -> i32 {
        self.0
    }

    /// The name of the liturgical year that starts in this Advent.
    pub fn liturgical(self) -> LiturgicalYearNumber {
        LiturgicalYearNumber(self.0 + 1)
    }

    /// The following Advent year. Fails at the upper end of the range.
    pub fn next(self) -> Result<Self> {
        Self::new(self.0 + 1)
    }
}

impl TryFrom<i32> for AdventYear {
    type Error = EngineError;

    fn try_from(year: i32) -> Result<Self> {
        Self::new(year)
    }
}

impl From<AdventYear> for i32 {
    fn from(year: AdventYear) -> Self {
        year.0
    }
}

impl fmt::Display for AdventYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Advent {}", self.0)
    }
}

/// The name of a liturgical year: the civil year in which it ends.
///
/// Liturgical year 2026 begins on the First Sunday of Advent 2025.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct LiturgicalYearNumber(i32);

impl LiturgicalYearNumber {
    pub const MIN: i32 = AdventYear::MIN + 1;
    pub const MAX: i32 = AdventYear::MAX + 1;

    /// Creates a liturgical year name, rejecting years outside the engine's range.
    pub fn new(year: i32) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&year) {
            Ok(Self(year))
        } else {
            Err(EngineError::YearOutOfRange {
                year,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    pub fn get(self) -> i32 {
        self.0
    }

    /// The Advent year in which this liturgical year begins.
    pub fn advent(self) -> AdventYear {
        AdventYear(self.0 - 1)
    }
}

impl TryFrom<i32> for LiturgicalYearNumber {
    type Error = EngineError;

    fn try_from(year: i32) -> Result<Self> {
        Self::new(year)
    }
}

impl From<LiturgicalYearNumber> for i32 {
    fn from(year: LiturgicalYearNumber) -> Self {
        year.0
    }
}

impl fmt::Display for LiturgicalYearNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Revised Common Lectionary Sunday cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cycle {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C")]
    C,
}

impl Cycle {
    pub fn letter(self) -> char {
        match self {
            Cycle::A => 'A',
            Cycle::B => 'B',
            Cycle::C => 'C',
        }
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiturgicalColor {
    White,
    Red,
    Green,
    Purple,
    Rose,
    Black,
    Gold,
}

impl LiturgicalColor {
    pub fn as_str(self) -> &'static str {
        match self {
            LiturgicalColor::White => "white",
            LiturgicalColor::Red => "red",
            LiturgicalColor::Green => "green",
            LiturgicalColor::Purple => "purple",
            LiturgicalColor::Rose => "rose",
            LiturgicalColor::Black => "black",
            LiturgicalColor::Gold => "gold",
        }
    }
}

impl fmt::Display for LiturgicalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Precedence of a named day. Variants are declared from highest to lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeastRank {
    PrincipalFeast,
    Feast,
    LesserFeast,
    Commemoration,
    Ordinary,
}

impl FeastRank {
    pub fn as_str(self) -> &'static str {
        match self {
            FeastRank::PrincipalFeast => "principal_feast",
            FeastRank::Feast => "feast",
            FeastRank::LesserFeast => "lesser_feast",
            FeastRank::Commemoration => "commemoration",
            FeastRank::Ordinary => "ordinary",
        }
    }
}

impl fmt::Display for FeastRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The six seasons of a liturgical year, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonName {
    Advent,
    Christmas,
    Epiphany,
    Lent,
    Easter,
    OrdinaryTime,
}

impl SeasonName {
    /// All seasons in the order they occur within a liturgical year.
    pub const ALL: [SeasonName; 6] = [
        SeasonName::Advent,
        SeasonName::Christmas,
        SeasonName::Epiphany,
        SeasonName::Lent,
        SeasonName::Easter,
        SeasonName::OrdinaryTime,
    ];

    /// Color used for the season as a whole.
    pub fn color(self) -> LiturgicalColor {
        match self {
            SeasonName::Advent | SeasonName::Lent => LiturgicalColor::Purple,
            SeasonName::Christmas | SeasonName::Easter => LiturgicalColor::White,
            SeasonName::Epiphany | SeasonName::OrdinaryTime => LiturgicalColor::Green,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SeasonName::Advent => "advent",
            SeasonName::Christmas => "christmas",
            SeasonName::Epiphany => "epiphany",
            SeasonName::Lent => "lent",
            SeasonName::Easter => "easter",
            SeasonName::OrdinaryTime => "ordinary_time",
        }
    }
}

impl fmt::Display for SeasonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A contiguous span of days belonging to one season. Both ends are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeasonWindow {
    pub name: SeasonName,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub color: LiturgicalColor,
}

impl SeasonWindow {
    /// Creates a window colored with the season's default color.
    pub fn new(name: SeasonName, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            name,
            start_date,
            end_date,
            color: name.color(),
        }
    }

    /// Returns true if `date` lies inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Number of days in the window.
    pub fn len_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// A named day of the liturgical year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiturgicalDate {
    pub date: NaiveDate,
    pub name: String,
    pub season: SeasonName,
    pub color: LiturgicalColor,
    pub rank: FeastRank,
    pub is_moveable: bool,
}

/// A Sunday of Ordinary Time and its Proper number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrdinaryTimeEntry {
    pub date: NaiveDate,
    pub proper_number: u32,
}
