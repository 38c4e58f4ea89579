//! Tracing and logging setup shared by processes that host a catalog.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::{LogFormat, TracingConfig, TracingConfigError};

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops. An
/// unknown `CATALOG_LOG_FORMAT` falls back to JSON and is reported as a
/// warning once the subscriber is installed.
pub fn init() {
    let (config, format_error) = TracingConfig::from_env_lenient();
    crate::tracing::init_with(&config);
    if let Some(err) = format_error {
        ::tracing::warn!(error = %err, "ignoring log format setting");
    }
}
