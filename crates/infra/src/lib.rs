//! Infrastructure layer: storage backends and their configuration.

pub mod config;
pub mod repository;

mod integration_tests;

pub use config::{ConfigError, RepositoryConfig};
pub use repository::InMemoryProductRepository;
