//! Top-level error type.

use thiserror::Error;

use crate::config::ConfigError;
use crate::observability::logging::LoggingError;

/// Boxed error returned by components.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by the application lifecycle.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("application is already started")]
    AlreadyStarted,

    #[error("component '{name}' failed to start")]
    Component {
        name: String,
        #[source]
        source: BoxError,
    },

    #[error("invalid configuration")]
    Config(#[from] ConfigError),

    #[error("cannot initialize logging")]
    Logging(#[from] LoggingError),
}
