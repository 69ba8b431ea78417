use core::fmt;

use crate::text::try_render;
use crate::{LoopPromiseCaughtError, LoopPromiseError};

/// Formats the diagnostic and emits it as a `tracing` error event.
///
/// The event carries `action_type` and `exception` fields; installing a
/// subscriber is up to the caller. An input that falls back to the placeholder
/// also emits a warning naming the field. Returns the same message as
/// [`loop_promise_caught_error`](crate::loop_promise_caught_error).
pub fn report<A, E>(action_type: &A, error: &E) -> String
where
    A: fmt::Display + ?Sized,
    E: fmt::Display + ?Sized,
{
    LoopPromiseCaughtError::new(action_type, error).report()
}

impl<A, E> LoopPromiseCaughtError<'_, A, E>
where
    A: fmt::Display + ?Sized,
    E: fmt::Display + ?Sized,
{
    /// Emits this diagnostic as a `tracing` error event and returns the message.
    pub fn report(&self) -> String {
        let placeholder = self.config().placeholder;
        let err = LoopPromiseError {
            action_type: render_field(self.action_type, "action_type", placeholder),
            exception: render_field(self.error, "exception", placeholder),
        };
        tracing::error!(
            action_type = %err.action_type,
            exception = %err.exception,
            "loop Promise rejected in action handler"
        );
        err.message()
    }
}

fn render_field<T>(value: &T, field: &'static str, placeholder: &str) -> String
where
    T: fmt::Display + ?Sized,
{
    match try_render(value) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(
                field = %field,
                error = %err,
                placeholder = %placeholder,
                "value could not be rendered"
            );
            placeholder.to_owned()
        }
    }
}
