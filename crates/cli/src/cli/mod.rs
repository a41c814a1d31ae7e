//! CLI command definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

/// Liturgical calendar date engine.
#[derive(Debug, Parser)]
#[command(name = "lectio")]
#[command(version, about = "Liturgical calendar date engine", long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, env = "LECTIO_FORMAT", default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
///
/// `ADVENT_YEAR` is the civil year in which the liturgical year's Advent
/// begins; `LITURGICAL_YEAR` is the civil year it ends in and is named by.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Easter Sunday and the Easter-relative feasts of a civil year.
    Easter {
        /// Civil year (1583-4099).
        year: i32,
    },
    /// First Sunday of Advent of a civil year.
    Advent {
        /// Civil year (1583-4099).
        year: i32,
    },
    /// Sunday lectionary cycle (A/B/C) of a liturgical year.
    Cycle {
        /// Liturgical year name, e.g. 2026 for the year starting in Advent 2025.
        liturgical_year: i32,
    },
    /// Date and liturgical season of a fixed feast in a civil year.
    Feast {
        /// Feast name, case-insensitive (e.g. "Annunciation").
        name: String,
        /// Civil year (1583-4099).
        year: i32,
    },
    /// Full liturgical year structure.
    Year {
        /// Civil year in which Advent begins.
        advent_year: i32,
    },
    /// The six season windows of a liturgical year.
    Seasons {
        /// Civil year in which Advent begins.
        advent_year: i32,
    },
    /// Numbered Sundays of Ordinary Time.
    Propers {
        /// Civil year in which Advent begins.
        advent_year: i32,
    },
    /// Every named day of a liturgical year.
    Observances {
        /// Civil year in which Advent begins.
        advent_year: i32,
    },
    /// Season, cycle and Proper for one or more dates.
    Lookup {
        /// Dates as YYYY-MM-DD.
        #[arg(required = true)]
        dates: Vec<NaiveDate>,
    },
    /// Compare persisted season rows against computed seasons.
    Backfill {
        /// Civil year in which Advent begins.
        advent_year: i32,
        /// JSON file with the persisted rows (an array of season rows).
        #[arg(long)]
        existing: Option<PathBuf>,
    },
}
