//! Transient acknowledgment popup.
//!
//! Visibility is computed from an explicit `now`, so callers (and tests)
//! control the clock. Showing a toast while one is up restarts the deadline.

use std::time::{Duration, Instant};

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    message: String,
    shown_at: Instant,
}

#[derive(Debug, Clone)]
pub struct ToastState {
    current: Option<Toast>,
    duration: Duration,
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl ToastState {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.current = Some(Toast {
            message: message.into(),
            shown_at: now,
        });
    }

    /// Message to display at `now`, if the toast has not expired yet.
    pub fn visible_message(&self, now: Instant) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|toast| now.saturating_duration_since(toast.shown_at) < self.duration)
            .map(|toast| toast.message.as_str())
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.visible_message(now).is_some()
    }

    /// Drop an expired toast. Returns true if one was dismissed.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.current.is_some() && !self.is_visible(now) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
