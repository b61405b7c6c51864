//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (lifecycle transitions, component failures)
//!     → diagnostics.rs (log / report helpers for callers)
//!
//! logging.rs installs the subscriber that writes them to stderr.
//! ```

pub mod diagnostics;
pub mod logging;

pub use diagnostics::{handle_error, log, report, terminate, ErrorChain};
pub use logging::{init_logging, LoggingError};
