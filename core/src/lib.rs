//! Diagnostics for loop promises that reject inside action handlers.
//!
//! An action handler may hand back a loop effect backed by a promise. Such
//! promises must never reject; when one does, the dispatcher catches the error
//! and uses this crate to describe what happened.
//!
//! # Feature Flags
//!
//! - `std` (default): `std::error::Error` impls, [`ErrorChain`], and catching
//!   panicking `Display` impls
//! - `tracing` (default): [`report`], which logs the diagnostic and any
//!   rendering fallbacks
//! - `serde`: `Serialize`/`Deserialize` for [`LoopPromiseError`]
//! - `fuzz`: `Arbitrary` for [`LoopPromiseError`]

pub mod config;
mod error;
mod message;
pub mod text;

#[cfg(feature = "std")]
mod chain;

#[cfg(feature = "tracing")]
mod report;

#[cfg(feature = "std")]
pub use chain::ErrorChain;
pub use config::FormatConfig;
pub use error::{LoopPromiseError, RenderError};
pub use message::{
    LoopPromiseCaughtError, MUST_NOT_THROW, THROWN_EXCEPTION_LABEL, loop_promise_caught_error,
};
#[cfg(feature = "tracing")]
pub use report::report;
pub use text::{DebugText, OrUndefined, Undefined, render_or, try_render};
