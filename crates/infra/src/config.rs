//! Configuration loading and representation.

use thiserror::Error;

/// Environment variable holding the initial map capacity.
pub const REPOSITORY_CAPACITY_ENV: &str = "CATALOG_REPOSITORY_CAPACITY";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Settings for [`InMemoryProductRepository`](crate::InMemoryProductRepository).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryConfig {
    /// Number of products to reserve room for up front.
    pub initial_capacity: usize,
}

impl RepositoryConfig {
    /// Read settings from the process environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup` (a variable name -> value source).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(REPOSITORY_CAPACITY_ENV) {
            config.initial_capacity = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: REPOSITORY_CAPACITY_ENV,
                value: raw.clone(),
            })?;
        }

        Ok(config)
    }
}
