//! Error types used by the toastvisor engine.
//!
//! Toast operations themselves never fail: malformed requests are defaulted and
//! operations on unknown ids are no-ops. The only engine-level error is
//! [`ConfigError`], returned when a rendering surface pushes an invalid configuration.
//!
//! Failures of the future passed to [`Toaster::promise`](crate::Toaster::promise)
//! are the caller's own error type and are returned unchanged.

use thiserror::Error;

/// # Errors produced when applying a configuration.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_visible` must allow at least one toast on screen.
    #[error("max_visible must be at least 1")]
    MaxVisibleZero,
}

impl ConfigError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use toastvisor::ConfigError;
    ///
    /// assert_eq!(ConfigError::MaxVisibleZero.as_label(), "config_max_visible_zero");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ConfigError::MaxVisibleZero => "config_max_visible_zero",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ConfigError::MaxVisibleZero => "max_visible=0 would hide every toast".to_string(),
        }
    }
}
