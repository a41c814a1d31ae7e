//! Pretty output formatting.

use lectio_core::calendar::{LiturgicalDate, LiturgicalYear, OrdinaryTimeEntry, SeasonWindow};
use lectio_core::storage::{SeasonDiff, SeasonRow};

use crate::commands::{AdventReport, CycleReport, DateLookup, EasterReport, FeastReport};

const DATE_FORMAT: &str = "%a %Y-%m-%d";

/// Format Easter and its dependent feasts.
pub fn format_easter(report: &EasterReport) -> String {
    let feasts = &report.feasts;
    let rows = [
        ("Ash Wednesday", feasts.ash_wednesday),
        ("Palm Sunday", feasts.palm_sunday),
        ("Maundy Thursday", feasts.maundy_thursday),
        ("Good Friday", feasts.good_friday),
        ("Holy Saturday", feasts.holy_saturday),
        ("Easter Day", feasts.easter),
        ("Ascension Day", feasts.ascension),
        ("Pentecost", feasts.pentecost),
        ("Trinity Sunday", feasts.trinity_sunday),
    ];

    let mut output = format!("EASTER {}\n", report.year);
    output.push_str(&"-".repeat(40));
    for (name, date) in rows {
        output.push_str(&format!("\n  {:<16} {}", name, date.format(DATE_FORMAT)));
    }
    output
}

pub fn format_advent(report: &AdventReport) -> String {
    format!(
        "First Sunday of Advent {}: {}",
        report.year,
        report.advent1.format(DATE_FORMAT)
    )
}

pub fn format_cycle(report: &CycleReport) -> String {
    format!(
        "Liturgical year {} ({}): Year {}",
        report.liturgical_year, report.advent_year, report.cycle
    )
}

pub fn format_feast(report: &FeastReport) -> String {
    let feast = &report.feast;
    format!(
        "{}: {} ({}, {}) in {}",
        feast.name,
        feast.date.format(DATE_FORMAT),
        feast.rank,
        feast.color,
        report.season
    )
}

/// Format a season window as a single line.
pub fn format_season(window: &SeasonWindow) -> String {
    format!(
        "{:<14} {} .. {}  ({} days, {})",
        window.name,
        window.start_date.format(DATE_FORMAT),
        window.end_date.format(DATE_FORMAT),
        window.len_days(),
        window.color
    )
}

pub fn format_seasons(seasons: &[SeasonWindow]) -> String {
    let mut output = format!("SEASONS ({})\n", seasons.len());
    output.push_str(&"-".repeat(40));
    for window in seasons {
        output.push_str(&format!("\n  {}", format_season(window)));
    }
    output
}

pub fn format_propers(sundays: &[OrdinaryTimeEntry]) -> String {
    if sundays.is_empty() {
        return "No numbered Sundays found.".to_string();
    }
    let mut output = format!("PROPERS ({})\n", sundays.len());
    output.push_str(&"-".repeat(40));
    for entry in sundays {
        output.push_str(&format!(
            "\n  Proper {:<3} {}",
            entry.proper_number,
            entry.date.format(DATE_FORMAT)
        ));
    }
    output
}

/// Format a full liturgical year.
pub fn format_year(year: &LiturgicalYear) -> String {
    let mut output = format!("LITURGICAL YEAR {} (Year {})\n", year.year, year.cycle);
    output.push_str(&"-".repeat(40));

    let dates = [
        ("Advent 1", year.advent1),
        ("Christmas", year.christmas),
        ("Epiphany", year.epiphany),
        ("Ash Wednesday", year.ash_wednesday),
        ("Palm Sunday", year.palm_sunday),
        ("Easter", year.easter),
        ("Pentecost", year.pentecost),
    ];
    for (name, date) in dates {
        output.push_str(&format!("\n  {:<14} {}", name, date.format(DATE_FORMAT)));
    }

    output.push_str("\n\n");
    output.push_str(&format_seasons(&year.seasons));

    if let (Some(first), Some(last)) = (year.ordinary_time.first(), year.ordinary_time.last()) {
        output.push_str(&format!(
            "\n\nPropers {}..={} from {} to {}",
            first.proper_number,
            last.proper_number,
            first.date.format(DATE_FORMAT),
            last.date.format(DATE_FORMAT)
        ));
    }
    output
}

pub fn format_observance(day: &LiturgicalDate) -> String {
    format!(
        "{}  {:<36} {:<15} {:<7} {}",
        day.date.format(DATE_FORMAT),
        day.name,
        day.rank,
        day.color,
        day.season
    )
}

pub fn format_observances(days: &[LiturgicalDate]) -> String {
    if days.is_empty() {
        return "No observances found.".to_string();
    }
    let mut output = format!("OBSERVANCES ({})\n", days.len());
    output.push_str(&"-".repeat(40));
    for day in days {
        output.push_str(&format!("\n  {}", format_observance(day)));
    }
    output
}

/// Format a single date lookup.
pub fn format_lookup(lookup: &DateLookup) -> String {
    let mut output = format!(
        "{}\n  Liturgical year: {} (Year {})\n  Season: {} ({})",
        lookup.date.format(DATE_FORMAT),
        lookup.liturgical_year,
        lookup.cycle,
        lookup.season,
        lookup.color
    );
    if let Some(proper) = lookup.proper {
        output.push_str(&format!("\n  Proper: {}", proper));
    }
    output
}

pub fn format_lookups(lookups: &[DateLookup]) -> String {
    lookups
        .iter()
        .map(format_lookup)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_row(row: &SeasonRow) -> String {
    format!(
        "{:<14} {} .. {}",
        row.name,
        row.start_date.format(DATE_FORMAT),
        row.end_date.format(DATE_FORMAT)
    )
}

/// Format a season backfill diff.
pub fn format_diff(diff: &SeasonDiff) -> String {
    if diff.is_empty() {
        return "Seasons are up to date.".to_string();
    }
    let mut output = String::new();
    if !diff.missing.is_empty() {
        output.push_str(&format!("MISSING ({})", diff.missing.len()));
        for row in &diff.missing {
            output.push_str(&format!("\n  + {}", format_row(row)));
        }
    }
    if !diff.stale.is_empty() {
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&format!("STALE ({})", diff.stale.len()));
        for row in &diff.stale {
            output.push_str(&format!("\n  - {}", format_row(row)));
        }
    }
    output
}
