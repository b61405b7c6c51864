//! Shared utilities for integration tests.

use std::sync::{Arc, Mutex};

use app_lifecycle::{BoxError, Component, FnComponent};

/// Ordered record of component start/stop calls.
#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn push(&self, event: String) {
        self.0.lock().unwrap().push(event);
    }

    #[allow(dead_code)]
    pub fn events(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// A component that records its calls and succeeds.
pub fn healthy(journal: &Journal, name: &'static str) -> impl Component + 'static {
    recording(journal, name, None)
}

/// A component that records its calls and fails to start with `message`.
#[allow(dead_code)]
pub fn failing(journal: &Journal, name: &'static str, message: &'static str) -> impl Component + 'static {
    recording(journal, name, Some(message))
}

fn recording(
    journal: &Journal,
    name: &'static str,
    start_error: Option<&'static str>,
) -> impl Component + 'static {
    let on_start = journal.clone();
    let on_stop = journal.clone();
    FnComponent::new(
        name,
        move || -> Result<(), BoxError> {
            on_start.push(format!("start {name}"));
            match start_error {
                Some(message) => Err(message.into()),
                None => Ok(()),
            }
        },
        move || -> Result<(), BoxError> {
            app_lifecycle::observability::log(format!("released {name}"));
            on_stop.push(format!("stop {name}"));
            Ok(())
        },
    )
}
