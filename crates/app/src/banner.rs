//! Transient error banner with a cancelable auto-clear deadline.
//!
//! Validation messages are shown inline for a fixed window and then clear
//! themselves. The deadline is explicit state, not a background timer:
//! showing a newer message re-arms the deadline, so a stale deadline can
//! never clear a message it does not belong to.

use chrono::{DateTime, Duration, Utc};

/// How long a message stays visible.
const DISPLAY_WINDOW_SECS: i64 = 3;

/// Inline error display state.
#[derive(Debug, Clone, Default)]
pub struct ErrorBanner {
    message: Option<String>,
    clear_at: Option<DateTime<Utc>>,
}

impl ErrorBanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a message and arms the auto-clear deadline from the current
    /// time, replacing any pending message and deadline.
    pub fn show(&mut self, message: impl Into<String>) {
        self.show_at(message, Utc::now());
    }

    /// Shows a message with the deadline computed from `now`.
    pub fn show_at(&mut self, message: impl Into<String>, now: DateTime<Utc>) {
        self.message = Some(message.into());
        self.clear_at = Some(now + Duration::seconds(DISPLAY_WINDOW_SECS));
    }

    /// Clears the banner if its deadline has passed.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if matches!(self.clear_at, Some(deadline) if now >= deadline) {
            self.dismiss();
        }
    }

    /// Clears the banner immediately, cancelling any pending deadline.
    pub fn dismiss(&mut self) {
        self.message = None;
        self.clear_at = None;
    }

    /// The currently visible message, if `now` is within its window.
    pub fn message_at(&self, now: DateTime<Utc>) -> Option<&str> {
        match self.clear_at {
            Some(deadline) if now >= deadline => None,
            _ => self.message.as_deref(),
        }
    }

    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        self.message_at(now).is_some()
    }
}
