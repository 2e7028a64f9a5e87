//! Tracing subscriber setup shared by all binaries.
//!
//! Logs go to stderr so the daily commands keep stdout for their single
//! status line.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ServerConfig;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    /// JSON in production, compact text elsewhere.
    pub fn for_server(config: &ServerConfig) -> Self {
        if config.is_production() {
            LogFormat::Json
        } else {
            LogFormat::Compact
        }
    }
}

/// Builds the filter: `RUST_LOG` wins over the configured directive.
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Fails if a global subscriber is already set.
pub fn init_tracing(default_directive: &str, format: LogFormat) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(env_filter(default_directive));

    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .json(),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .compact(),
            )
            .try_init(),
    }
}
