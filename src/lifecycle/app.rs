//! Application lifecycle controller.
//!
//! # States
//! ```text
//! Uninitialized → Started: start() succeeds
//! Stopped → Started: start() succeeds again
//! Started → Stopped: stop()
//! ```
//!
//! # Design Decisions
//! - Components start in registration order and stop in reverse
//! - A failed start releases what it acquired before returning
//! - stop() is accepted in any state and only acts when Started
//! - An App dropped while Started is stopped

use std::fmt;

use uuid::Uuid;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::lifecycle::component::Component;
use crate::observability::ErrorChain;

/// Lifecycle state of an [`App`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Uninitialized,
    Started,
    Stopped,
}

/// The application: configuration plus the components it sequences.
pub struct App {
    config: AppConfig,
    state: State,
    instance_id: Uuid,
    components: Vec<Box<dyn Component>>,
    /// Number of leading components whose start succeeded.
    started: usize,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            state: State::Uninitialized,
            instance_id: Uuid::new_v4(),
            components: Vec::new(),
            started: 0,
        }
    }

    /// Register a component, builder style.
    pub fn with_component(mut self, component: impl Component + 'static) -> Self {
        self.register(component);
        self
    }

    /// Register a component. It takes part from the next `start`.
    pub fn register(&mut self, component: impl Component + 'static) {
        self.components.push(Box::new(component));
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    fn span(&self) -> tracing::Span {
        tracing::info_span!("app", name = %self.config.name, instance = %self.instance_id)
    }

    /// Start every registered component.
    ///
    /// On failure the components already started are stopped again, the
    /// state is left as it was, and the error is returned to the caller.
    pub fn start(&mut self) -> Result<(), AppError> {
        let span = self.span();
        let _enter = span.enter();

        if self.state == State::Started {
            return Err(AppError::AlreadyStarted);
        }

        tracing::info!(components = self.components.len(), "Starting application");

        for index in 0..self.components.len() {
            let component = &mut self.components[index];
            if let Err(source) = component.start() {
                let name = component.name().to_string();
                tracing::error!(
                    component = %name,
                    error = %ErrorChain(&*source),
                    "Component failed to start"
                );
                self.release();
                return Err(AppError::Component { name, source });
            }
            tracing::debug!(component = component.name(), "Component started");
            self.started += 1;
        }

        self.state = State::Started;
        tracing::info!("Application started");
        Ok(())
    }

    /// Stop the application. Safe to call in any state, any number of times.
    pub fn stop(&mut self) {
        let span = self.span();
        let _enter = span.enter();

        if self.state != State::Started {
            tracing::debug!(state = ?self.state, "Stop ignored, application not started");
            return;
        }

        tracing::info!("Stopping application");
        self.release();
        self.state = State::Stopped;
        tracing::info!("Application stopped");
    }

    /// Stop started components in reverse order. Failures are logged.
    fn release(&mut self) {
        while self.started > 0 {
            self.started -= 1;
            let component = &mut self.components[self.started];
            match component.stop() {
                Ok(()) => tracing::debug!(component = component.name(), "Component stopped"),
                Err(err) => tracing::warn!(
                    component = component.name(),
                    error = %ErrorChain(&*err),
                    "Component failed to stop"
                ),
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if self.state == State::Started {
            self.stop();
        }
    }
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.components.iter().map(|c| c.name()).collect();
        f.debug_struct("App")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("instance_id", &self.instance_id)
            .field("components", &names)
            .finish()
    }
}
