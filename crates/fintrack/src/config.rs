use std::{env, time::Duration};

use fintrack_core::finance::DEFAULT_RECENT_LIMIT;

use crate::notify::DEFAULT_CAPACITY;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cache TTL in seconds (default: 300)
    pub cache_ttl_seconds: u64,
    /// Notifications buffered per subscriber (default: 100)
    pub notification_capacity: usize,
    /// Transactions shown in the "recent" list (default: 5)
    pub recent_transactions_limit: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 300)
    /// - `NOTIFICATION_CAPACITY` - Notifications buffered per subscriber (default: 100)
    /// - `RECENT_TRANSACTIONS_LIMIT` - Size of the recent transactions list (default: 5)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parse = |key: &str| lookup(key).and_then(|v| v.trim().parse().ok());

        Self {
            cache_ttl_seconds: parse("CACHE_TTL_SECONDS").unwrap_or(300),
            notification_capacity: parse("NOTIFICATION_CAPACITY")
                .map(|v: u64| v as usize)
                .unwrap_or(DEFAULT_CAPACITY),
            recent_transactions_limit: parse("RECENT_TRANSACTIONS_LIMIT")
                .map(|v: u64| v as usize)
                .unwrap_or(DEFAULT_RECENT_LIMIT),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_cache_ttl_conversion() {
        let config = Config {
            cache_ttl_seconds: 600,
            ..Config::default()
        };

        assert_eq!(config.cache_ttl(), Duration::from_secs(600));
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();

        assert_eq!(config.cache_ttl_seconds, 300);
        assert_eq!(config.notification_capacity, 100);
        assert_eq!(config.recent_transactions_limit, 5);
    }

    #[test]
    fn test_values_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("CACHE_TTL_SECONDS", "60"),
            ("NOTIFICATION_CAPACITY", " 16 "),
            ("RECENT_TRANSACTIONS_LIMIT", "ten"),
        ]
        .into_iter()
        .collect();

        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.cache_ttl(), Duration::from_secs(60));
        assert_eq!(config.notification_capacity, 16);
        // Unparseable, falls back
        assert_eq!(config.recent_transactions_limit, 5);
    }
}
