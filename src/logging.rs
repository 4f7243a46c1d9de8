//! Console logging for extension pages.
//!
//! In the browser, `log` records go to the devtools console and panics are
//! printed there too. Without the `browser` feature this is a no-op so
//! native tests can call it freely.

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;

use crate::error::UiError;

/// Install the console logger and panic hook.
///
/// # Errors
///
/// Returns [`UiError::Logger`] if a logger is already installed.
pub fn init_logging(level: log::Level) -> Result<(), UiError> {
    #[cfg(feature = "browser")]
    {
        console_error_panic_hook::set_once();
        console_log::init_with_level(level).map_err(|_| UiError::Logger)
    }
    #[cfg(not(feature = "browser"))]
    {
        log::trace!("console logging unavailable at {level}");
        Ok(())
    }
}
