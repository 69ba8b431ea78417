//! Error types for loopdiag.
//!
//! [`RenderError`] describes why a value could not be turned into text.
//! [`LoopPromiseError`] is the owned form of a caught loop diagnostic, for
//! dispatchers that want to propagate it rather than print it.
//!
//! # Example
//!
//! ```ignore
//! use thiserror::Error;
//!
//! #[derive(Error, Debug)]
//! pub enum DispatchError {
//!     #[error(transparent)]
//!     LoopRejected(#[from] loopdiag::LoopPromiseError),
//!
//!     // ... other variants
//! }
//! ```

use core::fmt;

use crate::message::compose;
use crate::{FormatConfig, LoopPromiseCaughtError};

/// Failure to render a value through its `Display` impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// The `Display` impl returned `fmt::Error`.
    Formatter,

    /// The `Display` impl panicked.
    ///
    /// Only produced with the `std` feature, which catches the unwind.
    Panicked,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Formatter => f.write_str("display implementation returned an error"),
            RenderError::Panicked => f.write_str("display implementation panicked"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RenderError {}

/// A loop promise rejection, with both inputs already rendered to text.
///
/// `Display` yields the full diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct LoopPromiseError {
    /// Text form of the action type whose handler produced the rejection.
    pub action_type: String,
    /// Text form of the caught error.
    pub exception: String,
}

impl LoopPromiseError {
    /// Renders both inputs with the default [`FormatConfig`].
    pub fn new<A, E>(action_type: &A, error: &E) -> Self
    where
        A: fmt::Display + ?Sized,
        E: fmt::Display + ?Sized,
    {
        Self::with_config(action_type, error, FormatConfig::DEFAULT)
    }

    /// Renders both inputs with `config`.
    pub fn with_config<A, E>(action_type: &A, error: &E, config: FormatConfig) -> Self
    where
        A: fmt::Display + ?Sized,
        E: fmt::Display + ?Sized,
    {
        LoopPromiseCaughtError::new(action_type, error)
            .with_config(config)
            .to_error()
    }

    /// The full diagnostic message.
    pub fn message(&self) -> String {
        compose(&self.action_type, &self.exception)
    }
}

impl fmt::Display for LoopPromiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LoopPromiseError {}
