//! # Toaster configuration.
//!
//! Provides [`ToasterConfig`], the settings shared by every public API call, and
//! [`ShowOptions`], per-call overrides for [`Toaster::show_with`](crate::Toaster::show_with).
//!
//! Config is used in three ways:
//! 1. **Toaster creation**: `Toaster::new(config)` / `Toaster::builder(config)`
//! 2. **Surface lifecycle**: the mounted rendering surface calls
//!    `Toaster::configure(config)` on mount and on every prop change (last write wins)
//! 3. **Request defaults**: `show` reads it whenever no override is given
//!
//! ## Sentinel values
//! - `default_duration = 0s` → toasts are sticky unless the request sets a duration

use std::time::Duration;

use crate::error::ConfigError;

/// Global configuration for a toaster.
///
/// ## Field semantics
/// - `max_visible`: how many toasts the list holds; the oldest is evicted beyond that (min 1)
/// - `default_duration`: auto-dismiss delay for requests without a valid duration
/// - `bus_capacity`: event bus ring buffer size (min 1; clamped by Bus)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToasterConfig {
    /// Maximum number of toasts kept in the list.
    pub max_visible: usize,

    /// Default auto-dismiss delay (`Duration::ZERO` = sticky).
    pub default_duration: Duration,

    /// Capacity of the event bus broadcast channel ring buffer.
    ///
    /// Not affected by [`Toaster::configure`](crate::Toaster::configure); only read at build time.
    pub bus_capacity: usize,
}

impl ToasterConfig {
    /// Returns `max_visible` clamped to a minimum of 1.
    #[inline]
    pub fn max_visible_clamped(&self) -> usize {
        self.max_visible.max(1)
    }

    /// Returns `true` if toasts without an explicit duration are sticky.
    #[inline]
    pub fn is_sticky_default(&self) -> bool {
        self.default_duration.is_zero()
    }

    /// Checks the configuration for values a rendering surface must not push.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_visible == 0 {
            return Err(ConfigError::MaxVisibleZero);
        }
        Ok(())
    }
}

impl Default for ToasterConfig {
    /// Default configuration:
    ///
    /// - `max_visible = 3`
    /// - `default_duration = 4000ms`
    /// - `bus_capacity = 1024`
    fn default() -> Self {
        Self {
            max_visible: 3,
            default_duration: Duration::from_millis(4000),
            bus_capacity: 1024,
        }
    }
}

/// Per-call overrides for [`Toaster::show_with`](crate::Toaster::show_with).
///
/// Unset fields fall back to the toaster's current [`ToasterConfig`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShowOptions {
    /// Overrides `max_visible` for this insertion (clamped to at least 1).
    pub max_visible: Option<usize>,
    /// Overrides `default_duration` for this request.
    pub default_duration: Option<Duration>,
}

impl ShowOptions {
    /// Sets the `max_visible` override.
    #[must_use]
    pub fn max_visible(mut self, n: usize) -> Self {
        self.max_visible = Some(n);
        self
    }

    /// Sets the `default_duration` override.
    #[must_use]
    pub fn default_duration(mut self, d: Duration) -> Self {
        self.default_duration = Some(d);
        self
    }

    /// Resolves the effective `(max_visible, default_duration)` against `cfg`.
    pub(crate) fn resolve(&self, cfg: &ToasterConfig) -> (usize, Duration) {
        let max_visible = self.max_visible.unwrap_or(cfg.max_visible).max(1);
        let duration = self.default_duration.unwrap_or(cfg.default_duration);
        (max_visible, duration)
    }
}
