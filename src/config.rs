//! Runtime configuration
//!
//! Environment-driven settings with defaults. Every value has a working
//! default so the CLI runs with no environment at all; an unparseable
//! value is a configuration error, not a silent fallback.

use crate::error::{Error, Result};

/// Database location (path, or `:memory:`)
pub const ENV_DB: &str = "PAGEKIT_DB";
/// Default page size when the caller gives no bound
pub const ENV_PAGE_SIZE: &str = "PAGEKIT_PAGE_SIZE";
/// Upper limit applied to requested page sizes
pub const ENV_MAX_PAGE_SIZE: &str = "PAGEKIT_MAX_PAGE_SIZE";

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Database path, or `:memory:`
    pub database: String,
    /// Page size used when neither `first` nor `last` is given
    pub page_size: i64,
    /// Hard cap on requested page sizes
    pub max_page_size: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: ":memory:".to_string(),
            page_size: 20,
            max_page_size: 100,
        }
    }
}

impl Config {
    /// Load configuration from the environment
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            database: std::env::var(ENV_DB).unwrap_or(defaults.database),
            page_size: parse_size(ENV_PAGE_SIZE, std::env::var(ENV_PAGE_SIZE).ok(), defaults.page_size)?,
            max_page_size: parse_size(
                ENV_MAX_PAGE_SIZE,
                std::env::var(ENV_MAX_PAGE_SIZE).ok(),
                defaults.max_page_size,
            )?,
        })
    }

    /// Clamp a requested page size to the configured maximum
    pub fn clamp_page_size(&self, requested: i64) -> i64 {
        requested.min(self.max_page_size)
    }
}

fn parse_size(field: &str, raw: Option<String>, default: i64) -> Result<i64> {
    match raw {
        None => Ok(default),
        Some(raw) => {
            let parsed: i64 = raw
                .trim()
                .parse()
                .map_err(|_| Error::invalid_config_value(field, format!("'{raw}' is not an integer")))?;
            if parsed < 1 {
                return Err(Error::invalid_config_value(field, "must be at least 1"));
            }
            Ok(parsed)
        }
    }
}
