//! Memoization of computed liturgical years.
//!
//! Caching is an optimization only: [`Uncached`] and [`YearCache`] return
//! equal values for the same year.

mod memory;
mod traits;

pub use memory::{YearCache, DEFAULT_CAPACITY};
pub use traits::{Uncached, YearSource};
