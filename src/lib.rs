//! Application lifecycle bootstrap library.

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use error::{AppError, BoxError};
pub use lifecycle::{run, App, Component, FnComponent, State};
