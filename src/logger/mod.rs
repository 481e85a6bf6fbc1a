//! Logger Module
//!
//! Console logging based on `tracing-subscriber`, with:
//! - `EnvFilter` level directives
//! - Full, compact or JSON line formats
//! - Color only when writing to a terminal

pub mod config;
pub mod error;


pub use self::config::*;
pub use self::error::LoggerError;

use std::io::IsTerminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber described by `config`
///
/// Fails if the configuration is invalid or a subscriber is already set.
pub fn init_logger(config: &LoggerConfig) -> Result<(), LoggerError> {
    config
        .validate()
        .map_err(|e| LoggerError::config(format!("{:#}", e)))?;

    let filter = config
        .env_filter()
        .map_err(|e| LoggerError::config(format!("{:#}", e)))?;
    let use_ansi = config.colored && std::io::stdout().is_terminal();
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Full => registry
            .with(
                fmt::layer()
                    .with_ansi(use_ansi)
                    .with_target(config.with_target)
                    .with_level(true),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .with_ansi(use_ansi)
                    .with_target(config.with_target)
                    .compact(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(config.with_target)
                    .json(),
            )
            .try_init(),
    };

    result.map_err(|_| LoggerError::AlreadyInitialized)
}
