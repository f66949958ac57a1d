//! Notification values
//!
//! A notification is an immutable message with a display category. The broadcaster
//! owns the live sequence; these types only describe what is in it.

use std::fmt;
use std::time::{Duration, Instant};

use crate::theme;

/// Upper bound on the live sequence. Publishing beyond it evicts the oldest entry.
pub const MAX_LIVE_NOTIFICATIONS: usize = 5;

/// How long a notification stays live unless it is removed earlier.
pub const NOTIFICATION_LIFETIME: Duration = Duration::from_millis(4000);

/// Opaque identifier, unique within one broadcaster
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(pub(crate) u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Notification category - determines presentation only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationCategory {
    /// Green banner for completed actions
    #[default]
    Success,
    /// Red banner for failed actions
    Error,
}

impl NotificationCategory {
    /// Colors used when rendering a banner of this category
    pub fn colors(self) -> &'static theme::notification::NotificationColors {
        match self {
            NotificationCategory::Success => &theme::notification::SUCCESS,
            NotificationCategory::Error => &theme::notification::ERROR,
        }
    }

    /// Short marker used by the console surface
    pub fn symbol(self) -> &'static str {
        match self {
            NotificationCategory::Success => "✔",
            NotificationCategory::Error => "✖",
        }
    }
}

/// A single live notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub category: NotificationCategory,
    pub created_at: Instant,
}

impl Notification {
    pub(crate) fn new(
        id: NotificationId,
        message: String,
        category: NotificationCategory,
        created_at: Instant,
    ) -> Self {
        Self {
            id,
            message,
            category,
            created_at,
        }
    }

    /// Instant at which this notification expires
    pub fn expires_at(&self) -> Instant {
        self.created_at + NOTIFICATION_LIFETIME
    }

    /// Check if the notification has outlived its lifetime at `now`
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at()
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
