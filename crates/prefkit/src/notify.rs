// File: src/notify.rs
// Purpose: Transient page notifications (one active toast at a time)

use std::fmt;
use std::time::Duration;

/// Notification severity, mapped by hosts onto styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
}

impl NotificationKind {
    /// Icon glyph shown next to the message
    pub fn icon(&self) -> char {
        match self {
            NotificationKind::Success => '✓',
            NotificationKind::Error => '✕',
            NotificationKind::Warning => '⚠',
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
        };
        write!(f, "{name}")
    }
}

/// One toast as handed to the host for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

/// Result of publishing: what to render and whether to schedule expiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published {
    pub notification: Notification,
    /// `None` means the toast is sticky until manually dismissed
    pub auto_dismiss: Option<Duration>,
}

/// Owns the single active notification.
///
/// Publishing replaces whatever is showing. A non-positive duration makes
/// the toast sticky; expiry timers report back with the toast id and are
/// ignored when they outlive the toast they belonged to.
#[derive(Debug)]
pub struct NotificationCenter {
    default_duration_ms: i64,
    next_id: u64,
    active: Option<u64>,
}

impl NotificationCenter {
    pub fn new(default_duration_ms: i64) -> Self {
        Self {
            default_duration_ms,
            next_id: 0,
            active: None,
        }
    }

    /// Publish with an explicit duration in milliseconds (non-positive =
    /// sticky)
    pub fn publish(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        duration_ms: i64,
    ) -> Published {
        self.next_id += 1;
        let id = self.next_id;
        self.active = Some(id);

        Published {
            notification: Notification {
                id,
                message: message.into(),
                kind,
            },
            auto_dismiss: (duration_ms > 0).then(|| Duration::from_millis(duration_ms as u64)),
        }
    }

    /// Publish with the configured default duration
    pub fn publish_default(&mut self, message: impl Into<String>, kind: NotificationKind) -> Published {
        self.publish(message, kind, self.default_duration_ms)
    }

    /// An expiry timer fired; returns whether the toast is still the
    /// active one and should be cleared.
    pub fn expire(&mut self, id: u64) -> bool {
        if self.active == Some(id) {
            self.active = None;
            return true;
        }
        false
    }

    /// Manual dismissal; returns whether anything was showing.
    pub fn dismiss(&mut self) -> bool {
        self.active.take().is_some()
    }

    pub fn active_id(&self) -> Option<u64> {
        self.active
    }
}
