//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! run():
//!     App::start → (optional) wait for shutdown signal → App::stop
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → resolve the shutdown future
//! ```
//!
//! # Design Decisions
//! - Ordered startup: components in registration order
//! - Ordered shutdown: reverse order, failures logged and skipped
//! - Start failure is returned, never turned into a process exit here

pub mod app;
pub mod component;
pub mod signals;

use std::future::Future;

pub use app::{App, State};
pub use component::{Component, FnComponent};

use crate::error::AppError;

/// Drive `app` through one start/stop cycle.
///
/// When `lifecycle.wait_for_signal` is set, the app stays started until
/// `shutdown` resolves. `stop` runs on both the success and failure paths.
pub async fn run<F>(mut app: App, shutdown: F) -> Result<(), AppError>
where
    F: Future<Output = ()>,
{
    if let Err(err) = app.start() {
        app.stop();
        return Err(err);
    }

    if app.config().lifecycle.wait_for_signal {
        tracing::info!("Waiting for shutdown signal");
        shutdown.await;
    }

    app.stop();
    Ok(())
}
