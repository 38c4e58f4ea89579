//! Tracing/logging initialization.

use std::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub const LOG_FORMAT_ENV: &str = "CATALOG_LOG_FORMAT";
pub const LOG_FILTER_ENV: &str = "CATALOG_LOG_FILTER";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TracingConfigError {
    #[error("unknown log format {0:?} (expected \"json\" or \"pretty\")")]
    UnknownFormat(String),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = TracingConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(TracingConfigError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// Filter used when `RUST_LOG` is unset.
    pub default_filter: String,
    pub format: LogFormat,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_filter: "info".to_string(),
            format: LogFormat::Json,
        }
    }
}

impl TracingConfig {
    pub fn from_env() -> Result<Self, TracingConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, TracingConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match Self::from_lookup_lenient(lookup) {
            (config, None) => Ok(config),
            (_, Some(err)) => Err(err),
        }
    }

    /// Like [`from_env`](Self::from_env), but an unknown format falls back to
    /// the default format instead of discarding the whole configuration.
    pub fn from_env_lenient() -> (Self, Option<TracingConfigError>) {
        Self::from_lookup_lenient(|key| std::env::var(key).ok())
    }

    /// Read every setting that parses; report the format error, if any,
    /// alongside the configuration.
    pub fn from_lookup_lenient<F>(lookup: F) -> (Self, Option<TracingConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut format_error = None;
        if let Some(format) = lookup(LOG_FORMAT_ENV) {
            match format.parse() {
                Ok(format) => config.format = format,
                Err(err) => format_error = Some(err),
            }
        }
        if let Some(filter) = lookup(LOG_FILTER_ENV) {
            config.default_filter = filter;
        }
        (config, format_error)
    }
}

/// Initialize tracing/logging for the process.
///
/// `RUST_LOG` takes precedence over `config.default_filter`. Safe to call
/// multiple times (subsequent calls are no-ops).
pub fn init_with(config: &TracingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}
