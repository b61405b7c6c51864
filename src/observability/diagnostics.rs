//! Diagnostics helpers.
//!
//! Reporting an error and terminating the process are separate operations.
//! [`handle_error`] composes the two for callers that want the fatal path;
//! everything else only writes to the diagnostic stream.

use std::error::Error;
use std::fmt;

/// Exit status used when the process terminates because of an error.
pub const FAILURE_STATUS: i32 = 1;

/// Write an informational line to the diagnostic stream.
pub fn log(message: impl AsRef<str>) {
    tracing::info!("{}", message.as_ref());
}

/// Write `err` and its full source chain to the diagnostic stream.
pub fn report(err: &(dyn Error + 'static)) {
    tracing::error!("Error: {}", ErrorChain(err));
}

/// Exit the process with `code`.
pub fn terminate(code: i32) -> ! {
    std::process::exit(code)
}

/// Unwrap `result`, or report the error and terminate with [`FAILURE_STATUS`].
pub fn handle_error<T, E>(result: Result<T, E>) -> T
where
    E: Error + 'static,
{
    match result {
        Ok(value) => value,
        Err(err) => {
            report(&err);
            terminate(FAILURE_STATUS)
        }
    }
}

/// Displays an error followed by each of its sources, separated by `": "`.
pub struct ErrorChain<'a>(pub &'a (dyn Error + 'static));

impl fmt::Display for ErrorChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        let mut source = self.0.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}
