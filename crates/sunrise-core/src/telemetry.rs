//! Logging initialization.
//!
//! Installs a `tracing` subscriber with an env filter and either a pretty or a
//! JSON formatter. Library code only emits events; the host process decides
//! when to call [`init_logging`].

use crate::{SunriseError, SunriseResult};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format of the fmt layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable, multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format.
    #[serde(default)]
    pub log_format: LogFormat,

    /// Include the event target in output.
    #[serde(default = "default_with_target")]
    pub with_target: bool,
}

fn default_log_level() -> String {
    "info,sunrise=debug".to_string()
}

fn default_with_target() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            with_target: default_with_target(),
        }
    }
}

/// Builds the env filter, preferring `RUST_LOG` over the configured level.
fn build_filter(config: &LoggingConfig) -> SunriseResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| {
            SunriseError::configuration(format!("Invalid log level '{}': {}", config.log_level, e))
        }),
    }
}

/// Initialize the global tracing subscriber.
///
/// Fails if the configured filter is invalid or a global subscriber is
/// already installed.
pub fn init_logging(config: &LoggingConfig) -> SunriseResult<()> {
    let filter = build_filter(config)?;

    let result = match config.log_format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_target(config.with_target),
            )
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(config.with_target),
            )
            .try_init(),
    };

    result.map_err(|e| SunriseError::internal(format!("Failed to install subscriber: {}", e)))?;

    tracing::info!(
        log_level = %config.log_level,
        log_format = ?config.log_format,
        "Logging initialized"
    );

    Ok(())
}
