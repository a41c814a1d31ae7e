use chrono::NaiveDate;
use thiserror::Error;

/// Errors produced by the liturgical calendar engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The year lies outside the range the Computus is valid for.
    #[error("Year {year} is outside the supported range {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },
    /// A lookup date does not belong to the requested liturgical year.
    #[error("Date {date} is outside the liturgical year starting in Advent {advent_year}")]
    DateOutOfRange { date: NaiveDate, advent_year: i32 },
    /// An internal consistency check failed. This is always an engine bug.
    #[error("Calendar computation invariant failed: {0}")]
    Invariant(#[from] InvariantViolation),
}

/// Internal consistency checks the engine asserts on every computation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("Easter {0} is outside March 22 - April 25")]
    EasterOutOfBounds(NaiveDate),
    #[error("Easter {0} is not a Sunday")]
    EasterNotSunday(NaiveDate),
    #[error("Ash Wednesday {0} is not a Wednesday")]
    AshWednesdayNotWednesday(NaiveDate),
    #[error("Advent 1 {0} is not a Sunday between November 27 and December 3")]
    Advent1OutOfBounds(NaiveDate),
    #[error("Season {previous} ends {end} but {next} starts {start}")]
    SeasonGap {
        previous: String,
        end: NaiveDate,
        next: String,
        start: NaiveDate,
    },
    #[error("Season {season} has end {end} before start {start}")]
    SeasonInverted {
        season: String,
        start: NaiveDate,
        end: NaiveDate,
    },
    #[error("Seasons span {start}..={end}, expected {expected_start}..={expected_end}")]
    SeasonBounds {
        start: NaiveDate,
        end: NaiveDate,
        expected_start: NaiveDate,
        expected_end: NaiveDate,
    },
    #[error("Liturgical year {year} does not follow Advent 1 in {advent1_year}")]
    YearNameOffset { year: i32, advent1_year: i32 },
    #[error("Ordinary Time Sunday {date} breaks the Proper sequence")]
    ProperSequence { date: NaiveDate },
    #[error("{year}-{month:02}-{day:02} is not a calendar date")]
    NonexistentDate { year: i32, month: u32, day: u32 },
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Logs an invariant failure and wraps it as an [`EngineError`].
pub(crate) fn invariant_failed(violation: InvariantViolation) -> EngineError {
    tracing::error!(%violation, "calendar invariant failed");
    EngineError::Invariant(violation)
}
