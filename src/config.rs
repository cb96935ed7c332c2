//! Application configuration.
//!
//! Values come from optional environment variables with built-in defaults.
//! In the browser there is no process environment, so the defaults apply;
//! native builds and tests can override them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use log::LevelFilter;

pub const DEFAULT_TITLE: &str = "Property Listings";
pub const DEFAULT_BRAND: &str = "Listings";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: expected off, error, warn, info, debug or trace")]
    InvalidLogLevel { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Document title.
    pub title: String,
    /// Text shown in the navigation bar.
    pub brand: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            brand: DEFAULT_BRAND.to_owned(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `LISTINGS_TITLE`: document title
    /// - `LISTINGS_BRAND`: navigation bar text
    /// - `LISTINGS_LOG_LEVEL`: `off`, `error`, `warn`, `info` (default), `debug`, `trace`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] if `LISTINGS_LOG_LEVEL` is set
    /// but not a known level.
    pub fn try_from_env() -> Result<Self, ConfigError> {
        let log_level = match env_string("LISTINGS_LOG_LEVEL") {
            Some(raw) => parse_log_level("LISTINGS_LOG_LEVEL", &raw)?,
            None => DEFAULT_LOG_LEVEL,
        };

        Ok(Self {
            title: env_string("LISTINGS_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
            brand: env_string("LISTINGS_BRAND").unwrap_or_else(|| DEFAULT_BRAND.to_owned()),
            log_level,
        })
    }

    /// Like [`AppConfig::try_from_env`], but falls back to defaults on error.
    pub fn from_env() -> Self {
        match Self::try_from_env() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default configuration");
                Self::default()
            }
        }
    }
}

/// Non-blank value of `key`, trimmed.
fn env_string(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_owned()),
        _ => None,
    }
}

fn parse_log_level(var: &'static str, raw: &str) -> Result<LevelFilter, ConfigError> {
    raw.parse::<LevelFilter>()
        .map_err(|_| ConfigError::InvalidLogLevel { var, value: raw.to_owned() })
}
