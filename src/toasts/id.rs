//! # Toast identifiers.
//!
//! [`ToastId`] is a cheap-to-clone string handle (`Arc<str>`). Callers may pick their
//! own ids (to replace or update a toast later) or let the toaster generate one.
//!
//! ## Generation
//! Generated ids are [`ID_LEN`] random lowercase alphanumeric characters. The
//! collision probability within one process is negligible; on top of that,
//! [`Toaster::show`](crate::Toaster::show) regenerates while the id is still live.

use std::fmt;
use std::sync::Arc;

use rand::{distr::Alphanumeric, Rng};

/// Length of generated identifiers.
pub const ID_LEN: usize = 12;

/// Identifier of a toast, unique within the store at any instant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(Arc<str>);

impl ToastId {
    /// Creates an id from a caller-chosen string.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random id.
    pub fn generate() -> Self {
        let id: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(ID_LEN)
            .map(|b| char::from(b).to_ascii_lowercase())
            .collect();
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToastId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ToastId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl AsRef<str> for ToastId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_ids_have_fixed_shape() {
        let id = ToastId::generate();
        assert_eq!(id.as_str().len(), ID_LEN);
        assert!(id
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn generated_ids_do_not_repeat() {
        let ids: HashSet<ToastId> = (0..1000).map(|_| ToastId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn caller_ids_compare_by_value() {
        assert_eq!(ToastId::from("upload"), ToastId::new(String::from("upload")));
        assert_eq!(ToastId::from("upload").to_string(), "upload");
    }
}
