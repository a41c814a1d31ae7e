//! In-memory year cache with LRU eviction.
//!
//! Liturgical years never go stale, so entries carry no TTL; the capacity
//! bound only limits memory.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard};

use lru::LruCache;

use super::traits::YearSource;
use crate::calendar::{generate_liturgical_year, AdventYear, LiturgicalYear, Result};

/// Default number of years kept by [`YearCache::default`].
pub const DEFAULT_CAPACITY: usize = 64;

/// Thread-safe memoizing [`YearSource`].
///
/// Cloning a `YearCache` shares the underlying store.
#[derive(Debug, Clone)]
pub struct YearCache {
    store: Arc<Mutex<LruCache<AdventYear, Arc<LiturgicalYear>>>>,
}

impl YearCache {
    /// Creates a cache holding at most `max_years` years.
    ///
    /// A capacity of 0 is raised to 1.
    pub fn new(max_years: usize) -> Self {
        let capacity = NonZeroUsize::new(max_years).unwrap_or(NonZeroUsize::MIN);
        Self {
            store: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    /// Number of years currently cached.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Maximum number of years the cache holds.
    pub fn capacity(&self) -> usize {
        self.lock().cap().get()
    }

    /// Drops every cached year.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<AdventYear, Arc<LiturgicalYear>>> {
        // Values are immutable once inserted, so a poisoned lock holds nothing torn.
        self.store
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for YearCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl YearSource for YearCache {
    fn year(&self, advent_year: AdventYear) -> Result<Arc<LiturgicalYear>> {
        if let Some(year) = self.lock().get(&advent_year) {
            tracing::trace!(advent_year = advent_year.get(), "year cache hit");
            return Ok(Arc::clone(year));
        }

        tracing::trace!(advent_year = advent_year.get(), "year cache miss");
        // Computed outside the lock; two racing misses produce equal values.
        let year = Arc::new(generate_liturgical_year(advent_year)?);
        self.lock().put(advent_year, Arc::clone(&year));
        Ok(year)
    }
}
