use tracing::{debug, warn};

pub const DEFAULT_MONGODB_URL: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE: &str = "keyword_manager";
pub const DEFAULT_COLLECTION: &str = "keywords";
pub const DEFAULT_COLUMN: &str = "kw";
pub const DEFAULT_RECENT_LIMIT: i64 = 200;

/// Application configuration
/// Loads an optional .env file, then reads KWIMPORT_* environment variables
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Connection string for the keyword document store
    pub mongodb_url: String,
    /// Database holding the keyword collection
    pub database: String,
    /// Collection keyword records are stored in
    pub collection: String,
    /// Column name pre-filled in the target column field
    pub default_column: String,
    /// How many recent records the database view lists
    pub recent_limit: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mongodb_url: DEFAULT_MONGODB_URL.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            default_column: DEFAULT_COLUMN.to_string(),
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl Config {
    /// Load configuration from .env (if present) and the process environment
    pub fn load() -> Self {
        if dotenvy::dotenv().is_ok() {
            debug!("Loaded .env file");
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    /// Missing or unparsable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let recent_limit = match non_empty("KWIMPORT_RECENT_LIMIT") {
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(limit) if limit > 0 => limit,
                _ => {
                    warn!(
                        "Ignoring invalid KWIMPORT_RECENT_LIMIT '{}', using {}",
                        raw, defaults.recent_limit
                    );
                    defaults.recent_limit
                }
            },
            None => defaults.recent_limit,
        };

        Self {
            mongodb_url: non_empty("KWIMPORT_MONGODB_URL").unwrap_or(defaults.mongodb_url),
            database: non_empty("KWIMPORT_DATABASE").unwrap_or(defaults.database),
            collection: non_empty("KWIMPORT_COLLECTION").unwrap_or(defaults.collection),
            default_column: non_empty("KWIMPORT_DEFAULT_COLUMN")
                .unwrap_or(defaults.default_column),
            recent_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.mongodb_url, "mongodb://localhost:27017");
        assert_eq!(config.default_column, "kw");
        assert_eq!(config.recent_limit, 200);
    }

    #[test]
    fn test_environment_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("KWIMPORT_MONGODB_URL", "mongodb://db.internal:27018"),
            ("KWIMPORT_DATABASE", "kw_test"),
            ("KWIMPORT_DEFAULT_COLUMN", "keyword"),
            ("KWIMPORT_RECENT_LIMIT", "50"),
        ]));

        assert_eq!(config.mongodb_url, "mongodb://db.internal:27018");
        assert_eq!(config.database, "kw_test");
        assert_eq!(config.collection, "keywords");
        assert_eq!(config.default_column, "keyword");
        assert_eq!(config.recent_limit, 50);
    }

    #[test]
    fn test_invalid_limit_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("KWIMPORT_RECENT_LIMIT", "-3")]));
        assert_eq!(config.recent_limit, DEFAULT_RECENT_LIMIT);

        let config = Config::from_lookup(lookup_from(&[("KWIMPORT_RECENT_LIMIT", "lots")]));
        assert_eq!(config.recent_limit, DEFAULT_RECENT_LIMIT);
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = Config::from_lookup(lookup_from(&[("KWIMPORT_DATABASE", "  ")]));
        assert_eq!(config.database, "keyword_manager");
    }
}
