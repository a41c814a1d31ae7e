//! Command execution.
//!
//! Every command maps onto one engine call and returns its rendered output,
//! so `main` only has to print.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use lectio_core::cache::{YearCache, YearSource};
use lectio_core::calendar::{
    advent_year_of, calculate_advent1, calculate_easter, calculate_seasons, find_fixed_feast,
    get_liturgical_cycle, get_ordinary_time_sundays, AdventYear, Cycle, FixedFeast,
    LiturgicalColor, LiturgicalYearNumber, MoveableFeasts, SeasonName,
};
use lectio_core::storage::{diff_seasons, SeasonRow};

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use crate::output::{pretty, render};

/// Easter and its dependent feasts for one civil year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EasterReport {
    pub year: i32,
    pub easter: NaiveDate,
    pub feasts: MoveableFeasts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdventReport {
    pub year: i32,
    pub advent1: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleReport {
    pub liturgical_year: LiturgicalYearNumber,
    pub advent_year: AdventYear,
    pub cycle: Cycle,
}

/// A fixed feast resolved in one civil year, with the season it falls in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeastReport {
    #[serde(flatten)]
    pub feast: FixedFeast,
    pub season: SeasonName,
}

/// Everything a reading lookup needs to know about one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateLookup {
    pub date: NaiveDate,
    pub liturgical_year: LiturgicalYearNumber,
    pub cycle: Cycle,
    pub season: SeasonName,
    pub color: LiturgicalColor,
    pub proper: Option<u32>,
}

/// Runs the parsed command and returns its rendered output.
pub fn run(cli: &Cli, cache: &YearCache) -> Result<String> {
    let format = cli.format;

    let output = match &cli.command {
        Commands::Easter { year } => {
            let easter = calculate_easter(*year)?;
            let report = EasterReport {
                year: *year,
                easter,
                feasts: MoveableFeasts::from_easter(easter)?,
            };
            render(&report, format, pretty::format_easter)
        }
        Commands::Advent { year } => {
            let report = AdventReport {
                year: *year,
                advent1: calculate_advent1(*year)?,
            };
            render(&report, format, pretty::format_advent)
        }
        Commands::Cycle { liturgical_year } => {
            let liturgical_year = LiturgicalYearNumber::new(*liturgical_year)?;
            let report = CycleReport {
                liturgical_year,
                advent_year: liturgical_year.advent(),
                cycle: get_liturgical_cycle(liturgical_year),
            };
            render(&report, format, pretty::format_cycle)
        }
        Commands::Feast { name, year } => {
            let def = find_fixed_feast(name)
                .ok_or_else(|| CliError::InvalidInput(format!("unknown fixed feast: {}", name)))?;
            let feast = def.in_year(*year)?;
            let season = cache
                .year(advent_year_of(feast.date)?)?
                .season_for(feast.date)?
                .name;
            render(&FeastReport { feast, season }, format, pretty::format_feast)
        }
        Commands::Year { advent_year } => {
            let year = cache.year(AdventYear::new(*advent_year)?)?;
            render(year.as_ref(), format, pretty::format_year)
        }
        Commands::Seasons { advent_year } => {
            let seasons = calculate_seasons(AdventYear::new(*advent_year)?)?;
            render(&seasons[..], format, pretty::format_seasons)
        }
        Commands::Propers { advent_year } => {
            let sundays = get_ordinary_time_sundays(AdventYear::new(*advent_year)?)?;
            render(&sundays[..], format, pretty::format_propers)
        }
        Commands::Observances { advent_year } => {
            let year = cache.year(AdventYear::new(*advent_year)?)?;
            let days = year.observances()?;
            render(&days[..], format, pretty::format_observances)
        }
        Commands::Lookup { dates } => {
            let lookups = dates
                .iter()
                .map(|date| lookup_date(*date, cache))
                .collect::<Result<Vec<_>>>()?;
            render(&lookups[..], format, pretty::format_lookups)
        }
        Commands::Backfill {
            advent_year,
            existing,
        } => {
            let year = AdventYear::new(*advent_year)?;
            let rows = match existing {
                Some(path) => read_rows(path)?,
                None => Vec::new(),
            };
            let diff = diff_seasons(&rows, year)?;
            tracing::info!(
                advent_year = year.get(),
                missing = diff.missing.len(),
                stale = diff.stale.len(),
                "computed season backfill"
            );
            render(&diff, format, pretty::format_diff)
        }
    };

    Ok(output)
}

/// Resolves season, cycle and Proper for a single date.
pub fn lookup_date(date: NaiveDate, cache: &YearCache) -> Result<DateLookup> {
    let year = cache.year(advent_year_of(date)?)?;
    let season = year.season_for(date)?;

    Ok(DateLookup {
        date,
        liturgical_year: year.year,
        cycle: year.cycle,
        season: season.name,
        color: season.color,
        proper: year.proper_for(date)?,
    })
}

fn read_rows(path: &Path) -> Result<Vec<SeasonRow>> {
    let contents = fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&contents)
        .map_err(|e| CliError::InvalidInput(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use clap::Parser;
    use lectio_core::storage::SeasonDiff;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args).unwrap();
        run(&cli, &YearCache::new(4))
    }

    #[test]
    fn test_lookup_date_in_ordinary_time() {
        let cache = YearCache::new(4);
        let lookup = lookup_date(make_date(2025, 6, 25), &cache).unwrap();

        assert_eq!(lookup.liturgical_year.get(), 2025);
        assert_eq!(lookup.cycle, Cycle::C);
        assert_eq!(lookup.season, SeasonName::OrdinaryTime);
        assert_eq!(lookup.proper, Some(2));
    }

    #[test]
    fn test_lookup_date_in_new_liturgical_year() {
        let cache = YearCache::new(4);
        let lookup = lookup_date(make_date(2025, 12, 25), &cache).unwrap();

        assert_eq!(lookup.liturgical_year.get(), 2026);
        assert_eq!(lookup.cycle, Cycle::A);
        assert_eq!(lookup.season, SeasonName::Christmas);
        assert_eq!(lookup.proper, None);
    }

    #[test]
    fn test_easter_json() {
        let output = run_args(&["lectio", "--format", "json", "easter", "2025"]).unwrap();
        let report: EasterReport = serde_json::from_str(&output).unwrap();

        assert_eq!(report.easter, make_date(2025, 4, 20));
        assert_eq!(report.feasts.ash_wednesday, make_date(2025, 3, 5));
        assert_eq!(report.feasts.pentecost, make_date(2025, 6, 8));
    }

    #[test]
    fn test_feast_lookup_by_name() {
        let output = run_args(&["lectio", "--format", "json", "feast", "saint mark", "2025"]).unwrap();
        let report: FeastReport = serde_json::from_str(&output).unwrap();

        assert_eq!(report.feast.name, "Saint Mark");
        assert_eq!(report.feast.date, make_date(2025, 4, 25));
        assert_eq!(report.season, SeasonName::Easter);
    }

    #[test]
    fn test_unknown_feast_is_invalid_input() {
        let result = run_args(&["lectio", "feast", "Saint Nobody", "2025"]);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_year_json_carries_name_offset() {
        let output = run_args(&["lectio", "--format", "json", "year", "2025"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["year"], 2026);
        assert_eq!(value["advent1"], "2025-11-30");
        assert_eq!(value["cycle"], "A");
    }

    #[test]
    fn test_out_of_range_year_is_an_error() {
        let result = run_args(&["lectio", "easter", "1500"]);
        assert!(matches!(result, Err(CliError::Engine(_))));
    }

    #[test]
    fn test_backfill_without_existing_rows() {
        let output = run_args(&["lectio", "--format", "json", "backfill", "2025"]).unwrap();
        let diff: SeasonDiff = serde_json::from_str(&output).unwrap();

        assert_eq!(diff.missing.len(), 6);
        assert!(diff.stale.is_empty());
    }

    #[test]
    fn test_backfill_reads_existing_rows() {
        let year = AdventYear::new(2025).unwrap();
        let rows: Vec<SeasonRow> = calculate_seasons(year)
            .unwrap()
            .iter()
            .take(4)
            .map(|w| SeasonRow::from_window(year, w))
            .collect();
        let path =
            std::env::temp_dir().join(format!("lectio-backfill-{}.json", std::process::id()));
        fs::write(&path, serde_json::to_string(&rows).unwrap()).unwrap();

        let cli = Cli::try_parse_from([
            "lectio",
            "--format",
            "json",
            "backfill",
            "2025",
            "--existing",
            path.to_str().unwrap(),
        ])
        .unwrap();
        let output = run(&cli, &YearCache::new(1)).unwrap();
        fs::remove_file(&path).unwrap();

        let diff: SeasonDiff = serde_json::from_str(&output).unwrap();
        let names: Vec<SeasonName> = diff.missing.iter().map(|r| r.name).collect();
        assert_eq!(names, vec![SeasonName::Easter, SeasonName::OrdinaryTime]);
    }

    #[test]
    fn test_cycle_pretty() {
        let cli = Cli::try_parse_from(["lectio", "--format", "pretty", "cycle", "2026"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Pretty);

        let output = run(&cli, &YearCache::new(1)).unwrap();
        assert_eq!(output, "Liturgical year 2026 (Advent 2025): Year A");
    }
}
