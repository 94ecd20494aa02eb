//! # Auto-dismiss timers.
//!
//! Timers belong to the rendering surface, not the store: the store never starts
//! or cancels them. This module provides the handle and a reference owner.
//!
//! - [`DismissTimer`] - one cancellable timer for one displayed toast
//! - [`AutoDismiss`] - keeps a timer per displayed toast in sync with the list

mod auto;
mod timer;

pub use auto::AutoDismiss;
pub use timer::DismissTimer;
