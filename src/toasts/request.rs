//! # Caller-facing toast descriptions.
//!
//! - [`ToastRequest`]: a partial toast; anything left out is defaulted by the normalizer.
//! - [`ToastPatch`]: a partial update applied to a live record.
//!
//! Plain strings convert into a request with only the title set, so
//! `toaster.success("Saved")` works without building a request by hand.

use std::time::Duration;

use super::id::ToastId;
use super::record::{ToastAction, ToastKind, ToastRecord};

/// Partial toast supplied by application code.
///
/// `duration_ms` is signed on purpose: a negative value is invalid input and is
/// replaced by the default during normalization, never reported.
#[derive(Clone, Debug, Default)]
pub struct ToastRequest {
    /// Caller-chosen id; a live toast with the same id is replaced.
    pub id: Option<ToastId>,
    /// Headline text.
    pub title: Option<String>,
    /// Secondary text.
    pub description: Option<String>,
    /// Visual category.
    pub kind: Option<ToastKind>,
    /// Auto-dismiss delay in milliseconds (`0` = sticky, negative = use default).
    pub duration_ms: Option<i64>,
    /// Optional action button.
    pub action: Option<ToastAction>,
    /// Whether the user may dismiss it.
    pub dismissible: Option<bool>,
}

impl ToastRequest {
    /// Creates an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<ToastId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the kind.
    #[must_use]
    pub fn with_kind(mut self, kind: ToastKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the auto-dismiss delay (`Duration::ZERO` = sticky).
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        let ms = duration.as_millis().min(i64::MAX as u128) as i64;
        self.duration_ms = Some(ms);
        self
    }

    /// Sets the auto-dismiss delay in raw milliseconds.
    #[must_use]
    pub fn with_duration_ms(mut self, ms: i64) -> Self {
        self.duration_ms = Some(ms);
        self
    }

    /// Makes the toast sticky.
    #[must_use]
    pub fn sticky(self) -> Self {
        self.with_duration_ms(0)
    }

    /// Attaches an action button.
    #[must_use]
    pub fn with_action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Sets whether the user may dismiss the toast.
    #[must_use]
    pub fn with_dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = Some(dismissible);
        self
    }
}

impl From<&str> for ToastRequest {
    fn from(title: &str) -> Self {
        Self::new().with_title(title)
    }
}

impl From<String> for ToastRequest {
    fn from(title: String) -> Self {
        Self::new().with_title(title)
    }
}

impl From<&String> for ToastRequest {
    fn from(title: &String) -> Self {
        Self::new().with_title(title.as_str())
    }
}

/// Partial update for a live record.
///
/// `id` and `created_at` are not patchable. `action: Some(None)` clears the action.
#[derive(Clone, Debug, Default)]
pub struct ToastPatch {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New kind.
    pub kind: Option<ToastKind>,
    /// New auto-dismiss delay.
    pub duration: Option<Duration>,
    /// New action (`Some(None)` removes it).
    pub action: Option<Option<ToastAction>>,
    /// New dismissible flag.
    pub dismissible: Option<bool>,
}

impl ToastPatch {
    /// Creates an empty patch (applying it changes nothing).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the kind.
    #[must_use]
    pub fn kind(mut self, kind: ToastKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the auto-dismiss delay.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Replaces the action (`None` removes it).
    #[must_use]
    pub fn action(mut self, action: Option<ToastAction>) -> Self {
        self.action = Some(action);
        self
    }

    /// Sets the dismissible flag.
    #[must_use]
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = Some(dismissible);
        self
    }

    /// Applies every set field to `record`.
    pub fn apply(self, record: &mut ToastRecord) {
        if let Some(title) = self.title {
            record.title = title;
        }
        if let Some(description) = self.description {
            record.description = description;
        }
        if let Some(kind) = self.kind {
            record.kind = kind;
        }
        if let Some(duration) = self.duration {
            record.duration = duration;
        }
        if let Some(action) = self.action {
            record.action = action;
        }
        if let Some(dismissible) = self.dismissible {
            record.dismissible = dismissible;
        }
    }
}

impl From<ToastRecord> for ToastPatch {
    /// Every mutable field of `record` is set; its `id` and `created_at` are ignored.
    fn from(record: ToastRecord) -> Self {
        Self {
            title: Some(record.title),
            description: Some(record.description),
            kind: Some(record.kind),
            duration: Some(record.duration),
            action: Some(record.action),
            dismissible: Some(record.dismissible),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::SystemTime;

    fn record() -> ToastRecord {
        ToastRecord {
            id: ToastId::from("a"),
            title: "old".into(),
            description: "desc".into(),
            kind: ToastKind::Default,
            duration: Duration::ZERO,
            action: Some(ToastAction::new("Undo", || {})),
            dismissible: true,
            created_at: SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn string_coerces_to_title() {
        let req = ToastRequest::from("Saved");
        assert_eq!(req.title.as_deref(), Some("Saved"));
        assert!(req.kind.is_none());
        assert!(req.id.is_none());
    }

    #[test]
    fn with_duration_stores_milliseconds() {
        let req = ToastRequest::new().with_duration(Duration::from_secs(2));
        assert_eq!(req.duration_ms, Some(2000));
        assert_eq!(ToastRequest::new().sticky().duration_ms, Some(0));
    }

    #[test]
    fn patch_touches_only_set_fields() {
        let mut rec = record();
        ToastPatch::new()
            .title("new")
            .kind(ToastKind::Success)
            .apply(&mut rec);

        assert_eq!(rec.title, "new");
        assert_eq!(rec.kind, ToastKind::Success);
        assert_eq!(rec.description, "desc");
        assert!(rec.action.is_some());
    }

    #[test]
    fn patch_can_clear_action() {
        let mut rec = record();
        ToastPatch::new().action(None).apply(&mut rec);
        assert!(rec.action.is_none());
    }

    #[test]
    fn patch_from_record_keeps_identity_of_target() {
        let mut target = record();
        let mut source = record();
        source.id = ToastId::from("other");
        source.title = "replaced".into();
        source.created_at = SystemTime::now();

        ToastPatch::from(source).apply(&mut target);
        assert_eq!(target.id.as_str(), "a");
        assert_eq!(target.created_at, SystemTime::UNIX_EPOCH);
        assert_eq!(target.title, "replaced");
    }
}
