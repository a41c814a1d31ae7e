use std::sync::Arc;

use crate::calendar::{generate_liturgical_year, AdventYear, LiturgicalYear, Result};

/// A source of computed liturgical years.
///
/// Consumers depend on this trait so they can be handed either the bare
/// engine or a memoizing cache without caring which.
pub trait YearSource: Send + Sync {
    /// Returns the liturgical year beginning in `advent_year`.
    fn year(&self, advent_year: AdventYear) -> Result<Arc<LiturgicalYear>>;
}

/// Computes every year on demand, with no memoization.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uncached;

impl YearSource for Uncached {
    fn year(&self, advent_year: AdventYear) -> Result<Arc<LiturgicalYear>> {
        generate_liturgical_year(advent_year).map(Arc::new)
    }
}
