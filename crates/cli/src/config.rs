use std::env;

use lectio_core::cache::DEFAULT_CAPACITY;

/// CLI configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of liturgical years kept in memory (default: 64)
    pub cache_max_years: usize,
    /// Emit logs as JSON lines instead of human-readable text (default: false)
    pub log_json: bool,
    /// Log filter used when `RUST_LOG` is unset (default: "lectio=info,lectio_core=info")
    pub default_log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `LECTIO_CACHE_MAX_YEARS` - Year cache capacity (default: 64)
    /// - `LECTIO_LOG_JSON` - `1`/`true` for JSON logs (default: false)
    /// - `LECTIO_LOG` - Fallback log filter (default: "lectio=info,lectio_core=info")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            cache_max_years: lookup("LECTIO_CACHE_MAX_YEARS")
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(DEFAULT_CAPACITY),
            log_json: lookup("LECTIO_LOG_JSON")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            default_log_filter: lookup("LECTIO_LOG")
                .unwrap_or_else(|| "lectio=info,lectio_core=info".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_lookup(lookup_from(&[]));

        assert_eq!(config.cache_max_years, 64);
        assert!(!config.log_json);
        assert_eq!(config.default_log_filter, "lectio=info,lectio_core=info");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("LECTIO_CACHE_MAX_YEARS", "8"),
            ("LECTIO_LOG_JSON", "TRUE"),
            ("LECTIO_LOG", "lectio_core=trace"),
        ]));

        assert_eq!(config.cache_max_years, 8);
        assert!(config.log_json);
        assert_eq!(config.default_log_filter, "lectio_core=trace");
    }

    #[test]
    fn test_invalid_capacity_falls_back() {
        let zero = Config::from_lookup(lookup_from(&[("LECTIO_CACHE_MAX_YEARS", "0")]));
        let junk = Config::from_lookup(lookup_from(&[("LECTIO_CACHE_MAX_YEARS", "many")]));

        assert_eq!(zero.cache_max_years, 64);
        assert_eq!(junk.cache_max_years, 64);
    }
}
