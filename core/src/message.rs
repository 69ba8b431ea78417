//! The loop promise rejection message.
//!
//! Action handlers may return loop effects backed by promises. When such a
//! promise rejects, the dispatcher catches the error and calls
//! [`loop_promise_caught_error`] to describe it:
//!
//! ```text
//!
//! loop Promise caught when returned from action of type INCREMENT.
//! loop Promises must not throw!
//!
//! Thrown exception:
//! boom
//! ```
//!
//! The label line carries a trailing space and the message is wrapped in
//! leading and trailing newlines.

use core::fmt;

use crate::text::render_or;
use crate::{FormatConfig, LoopPromiseError};

/// The fixed line stating the invariant that was broken.
pub const MUST_NOT_THROW: &str = "loop Promises must not throw!";

/// Label preceding the caught error's text.
pub const THROWN_EXCEPTION_LABEL: &str = "Thrown exception:";

/// Formats the diagnostic for a loop promise that rejected inside the handler
/// for `action_type`.
///
/// Never fails: values whose `Display` impl errors or panics are replaced by
/// [`FormatConfig::DEFAULT`]'s placeholder.
///
/// # Example
///
/// ```
/// use loopdiag_core::loop_promise_caught_error;
///
/// let err = std::io::Error::other("boom");
/// let message = loop_promise_caught_error("INCREMENT", &err);
///
/// assert!(message.contains("action of type INCREMENT."));
/// assert!(message.ends_with("Thrown exception: \nboom\n"));
/// ```
pub fn loop_promise_caught_error<A, E>(action_type: &A, error: &E) -> String
where
    A: fmt::Display + ?Sized,
    E: fmt::Display + ?Sized,
{
    LoopPromiseCaughtError::new(action_type, error).render()
}

pub(crate) fn compose(action_type: &str, exception: &str) -> String {
    format!(
        "\nloop Promise caught when returned from action of type {action_type}.\n\
         {MUST_NOT_THROW}\n\
         \n\
         {THROWN_EXCEPTION_LABEL} \n\
         {exception}\n"
    )
}

/// Borrowed view of a caught loop promise rejection.
///
/// Renders lazily, so it can be handed to `format!` or a logger without
/// building the message up front.
#[derive(Debug)]
pub struct LoopPromiseCaughtError<'a, A: ?Sized, E: ?Sized> {
    pub(crate) action_type: &'a A,
    pub(crate) error: &'a E,
    config: FormatConfig,
}

impl<'a, A, E> LoopPromiseCaughtError<'a, A, E>
where
    A: fmt::Display + ?Sized,
    E: fmt::Display + ?Sized,
{
    pub fn new(action_type: &'a A, error: &'a E) -> Self {
        Self {
            action_type,
            error,
            config: FormatConfig::DEFAULT,
        }
    }

    pub fn with_config(mut self, config: FormatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Renders both inputs into an owned [`LoopPromiseError`].
    pub fn to_error(&self) -> LoopPromiseError {
        LoopPromiseError {
            action_type: render_or(self.action_type, self.config.placeholder),
            exception: render_or(self.error, self.config.placeholder),
        }
    }

    /// Builds the full message.
    pub fn render(&self) -> String {
        self.to_error().message()
    }
}

impl<A, E> fmt::Display for LoopPromiseCaughtError<'_, A, E>
where
    A: fmt::Display + ?Sized,
    E: fmt::Display + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
