mod advent;
mod cycle;
pub mod dates;
mod easter;
mod error;
mod fixed;
mod moveable;
mod propers;
mod seasons;
mod types;
mod year;

pub use advent::{advent_sundays, calculate_advent1, check_advent1};
pub use cycle::get_liturgical_cycle;
pub use easter::{calculate_easter, check_easter};
pub use error::{EngineError, InvariantViolation, Result};
pub use fixed::{calculate_fixed_feasts, find_fixed_feast, FixedFeast, FixedFeastDef, FIXED_FEASTS};
pub use moveable::{
    calculate_ascension, calculate_ash_wednesday, calculate_good_friday, calculate_holy_saturday,
    calculate_maundy_thursday, calculate_palm_sunday, calculate_pentecost, calculate_trinity_sunday,
    MoveableFeasts,
};
pub use propers::{check_propers, get_ordinary_time_sundays, get_proper_for_date, FIRST_PROPER};
pub use seasons::{
    advent_year_of, calculate_seasons, check_tiling, get_season_for_date, season_for_date,
};
pub use types::{
    AdventYear, Cycle, FeastRank, LiturgicalColor, LiturgicalDate, LiturgicalYearNumber,
    OrdinaryTimeEntry, SeasonName, SeasonWindow,
};
pub use year::{check_year_name, generate_liturgical_year, LiturgicalYear};
