//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Configure log level from config, overridable through `RUST_LOG`
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - All diagnostic lines go to stderr, stdout stays free for program output
//! - JSON format for production, compact or pretty format for development

use std::io::IsTerminal;

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer};

use crate::config::{LogFormat, ObservabilityConfig};

/// Error type for logging initialization.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("unknown log level '{0}'")]
    Level(String),

    #[error("a global subscriber is already installed")]
    Init(#[from] TryInitError),
}

/// Install the global subscriber described by `config`.
///
/// `RUST_LOG`, when set, takes precedence over `config.log_level`.
pub fn init_logging(config: &ObservabilityConfig) -> Result<(), LoggingError> {
    let level: Level = config
        .log_level
        .parse()
        .map_err(|_| LoggingError::Level(config.log_level.clone()))?;

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    let ansi = std::io::stderr().is_terminal();
    let layer = match config.log_format {
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_ansi(ansi)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_ansi(ansi)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Json => fmt::layer().json().with_writer(std::io::stderr).boxed(),
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()?;

    Ok(())
}
