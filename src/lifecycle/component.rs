//! Units of startup work registered on an [`App`](super::App).

use crate::error::BoxError;

/// A resource or subsystem with matching start and stop steps.
///
/// `stop` is only called on components whose `start` returned `Ok`.
pub trait Component: Send {
    /// Name used in logs and errors.
    fn name(&self) -> &str;

    /// Acquire whatever the component needs.
    fn start(&mut self) -> Result<(), BoxError>;

    /// Release what `start` acquired.
    fn stop(&mut self) -> Result<(), BoxError>;
}

/// Component built from a pair of closures.
pub struct FnComponent<S, T> {
    name: String,
    on_start: S,
    on_stop: T,
}

impl<S, T> FnComponent<S, T>
where
    S: FnMut() -> Result<(), BoxError> + Send,
    T: FnMut() -> Result<(), BoxError> + Send,
{
    pub fn new(name: impl Into<String>, on_start: S, on_stop: T) -> Self {
        Self {
            name: name.into(),
            on_start,
            on_stop,
        }
    }
}

impl<S, T> Component for FnComponent<S, T>
where
    S: FnMut() -> Result<(), BoxError> + Send,
    T: FnMut() -> Result<(), BoxError> + Send,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn start(&mut self) -> Result<(), BoxError> {
        (self.on_start)()
    }

    fn stop(&mut self) -> Result<(), BoxError> {
        (self.on_stop)()
    }
}
