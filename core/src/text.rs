//! Best-effort text coercion for arbitrary values.
//!
//! Caught errors come from user code, and so do their `Display` impls. A
//! `Display` impl may return [`fmt::Error`] or even panic; the helpers here
//! turn every value into a `String` regardless.

use core::fmt::{self, Write};

use crate::RenderError;

/// Renders `value` through its `Display` impl.
///
/// Returns [`RenderError::Formatter`] if the impl reports `fmt::Error`. With
/// the `std` feature a panicking impl is caught and reported as
/// [`RenderError::Panicked`]; the panic hook still runs.
pub fn try_render<T>(value: &T) -> Result<String, RenderError>
where
    T: fmt::Display + ?Sized,
{
    #[cfg(feature = "std")]
    {
        std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| write_text(value)))
            .unwrap_or(Err(RenderError::Panicked))
    }

    #[cfg(not(feature = "std"))]
    {
        write_text(value)
    }
}

/// Renders `value`, substituting `placeholder` when rendering fails.
///
/// Silent on fallback; use [`try_render`] to observe the failure.
pub fn render_or<T>(value: &T, placeholder: &str) -> String
where
    T: fmt::Display + ?Sized,
{
    try_render(value).unwrap_or_else(|_| placeholder.to_owned())
}

fn write_text<T>(value: &T) -> Result<String, RenderError>
where
    T: fmt::Display + ?Sized,
{
    let mut buf = String::new();
    write!(buf, "{value}").map_err(|_| RenderError::Formatter)?;
    Ok(buf)
}

/// Stand-in for a missing action type or error value.
///
/// Renders as `undefined`, matching what a JavaScript dispatcher would print
/// for an absent value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Undefined;

impl fmt::Display for Undefined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("undefined")
    }
}

/// Displays the wrapped value, or `undefined` when absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OrUndefined<T>(pub Option<T>);

impl<T> From<Option<T>> for OrUndefined<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T: fmt::Display> fmt::Display for OrUndefined<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => Undefined.fmt(f),
        }
    }
}

/// Displays a value through its `Debug` impl.
///
/// Useful for symbol-like action types (unit structs, enums without a
/// `Display` impl).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebugText<T>(pub T);

impl<T: fmt::Debug> fmt::Display for DebugText<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
