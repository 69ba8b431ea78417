//! Formatting configuration for loop diagnostics.
//!
//! This module provides [`FormatConfig`] for controlling how caught loop
//! errors are turned into text: the placeholder used when a value cannot be
//! rendered, and how far [`ErrorChain`](crate::ErrorChain) walks an error's
//! `source()` links.
//!
//! # Example
//!
//! ```
//! use loopdiag_core::FormatConfig;
//!
//! // Use default settings (placeholder: "<unprintable>", depth: 16)
//! let config = FormatConfig::default();
//!
//! // Custom placeholder and a shallower cause listing
//! let config = FormatConfig::new()
//!     .with_placeholder("[error rendering failed]")
//!     .with_max_source_depth(4);
//! # assert_eq!(config.max_source_depth, 4);
//! ```

/// Configuration for diagnostic rendering.
///
/// # Default Values
///
/// | Setting | Default |
/// |---------|---------|
/// | `placeholder` | `"<unprintable>"` |
/// | `max_source_depth` | 16 |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    /// Text substituted for a value whose `Display` impl fails or panics.
    pub placeholder: &'static str,

    /// Maximum number of `source()` links listed under "Caused by:".
    ///
    /// Error chains can be arbitrarily long (or cyclic through interior
    /// mutability), so the walk always stops here. `0` lists no causes.
    pub max_source_depth: usize,
}

impl Default for FormatConfig {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FormatConfig {
    /// Default configuration, usable in const contexts.
    pub const DEFAULT: Self = Self {
        placeholder: "<unprintable>",
        max_source_depth: 16,
    };

    /// Creates a new configuration with default values.
    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Sets the placeholder used for values that cannot be rendered.
    #[inline]
    pub const fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Sets the maximum number of causes rendered by an error chain.
    #[inline]
    pub const fn with_max_source_depth(mut self, depth: usize) -> Self {
        self.max_source_depth = depth;
        self
    }

    /// Renders only the top-level error, never its causes.
    #[inline]
    pub const fn without_sources(self) -> Self {
        self.with_max_source_depth(0)
    }
}
