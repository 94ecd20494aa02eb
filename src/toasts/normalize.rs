//! # Request normalization.
//!
//! Turns a partial [`ToastRequest`] into a complete [`ToastRecord`].
//!
//! ## Rules
//! - `id`: the request's id, else a freshly generated one
//! - `duration`: `duration_ms` if it is `>= 0`, else `default_duration`
//! - `title`/`description`: empty string when missing
//! - `kind`: [`ToastKind::Default`] when missing
//! - `dismissible`: `true` when missing
//! - `created_at`: current wall-clock time
//!
//! Apart from id generation and the clock read, this is a pure function.

use std::time::{Duration, SystemTime};

use super::id::ToastId;
use super::record::ToastRecord;
use super::request::ToastRequest;

/// Builds a canonical record from `request`, filling gaps with defaults.
pub fn normalize(request: ToastRequest, default_duration: Duration) -> ToastRecord {
    let duration = match request.duration_ms {
        Some(ms) if ms >= 0 => Duration::from_millis(ms as u64),
        _ => default_duration,
    };

    ToastRecord {
        id: request.id.unwrap_or_else(ToastId::generate),
        title: request.title.unwrap_or_default(),
        description: request.description.unwrap_or_default(),
        kind: request.kind.unwrap_or_default(),
        duration,
        action: request.action,
        dismissible: request.dismissible.unwrap_or(true),
        created_at: SystemTime::now(),
    }
}
