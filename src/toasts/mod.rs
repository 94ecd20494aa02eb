//! # Toast data model.
//!
//! - [`ToastId`] - identifier, caller-chosen or generated
//! - [`ToastRequest`] - partial toast supplied by application code
//! - [`ToastRecord`] - complete toast held by the store
//! - [`ToastPatch`] - partial update of a live record
//! - [`normalize`] - request + defaults -> record

mod id;
mod normalize;
mod record;
mod request;

pub use id::{ToastId, ID_LEN};
pub use normalize::normalize;
pub use record::{ActionFn, ToastAction, ToastKind, ToastRecord};
pub use request::{ToastPatch, ToastRequest};
