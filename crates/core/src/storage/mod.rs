mod backfill;
mod types;

pub use backfill::{diff_seasons, missing_seasons, SeasonDiff};
pub use types::SeasonRow;
