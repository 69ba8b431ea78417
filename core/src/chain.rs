use std::error::Error as StdError;
use std::fmt;

use crate::FormatConfig;
use crate::text::render_or;

/// Displays an error followed by its `source()` chain.
///
/// Output shape:
///
/// ```text
/// request failed
///
/// Caused by:
///     0: connection reset
///     1: broken pipe
/// ```
///
/// The walk stops after [`FormatConfig::max_source_depth`] causes and notes
/// that further causes were omitted.
pub struct ErrorChain<'a> {
    error: &'a (dyn StdError + 'a),
    config: FormatConfig,
}

impl<'a> ErrorChain<'a> {
    pub fn new(error: &'a (dyn StdError + 'a)) -> Self {
        Self {
            error,
            config: FormatConfig::DEFAULT,
        }
    }

    pub fn with_config(mut self, config: FormatConfig) -> Self {
        self.config = config;
        self
    }
}

impl fmt::Debug for ErrorChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorChain")
            .field("error", &self.error)
            .field("config", &self.config)
            .finish()
    }
}

impl fmt::Display for ErrorChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let placeholder = self.config.placeholder;
        f.write_str(&render_or(self.error, placeholder))?;

        let mut source = self.error.source();
        if source.is_none() || self.config.max_source_depth == 0 {
            return Ok(());
        }

        f.write_str("\n\nCaused by:")?;
        let mut depth = 0;
        while let Some(cause) = source {
            if depth == self.config.max_source_depth {
                f.write_str("\n    ... further causes omitted")?;
                break;
            }
            write!(f, "\n    {depth}: {}", render_or(cause, placeholder))?;
            depth += 1;
            source = cause.source();
        }
        Ok(())
    }
}
