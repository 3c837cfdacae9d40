// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` holds at most one toast. Pushing a new one replaces the
//! current toast outright; the replaced toast and its timer are gone.

use super::notification::{Notification, NotificationId, Severity};
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking the auto-dismiss timer.
    Tick,
}

/// Owns the single visible toast.
#[derive(Debug, Default)]
pub struct Manager {
    current: Option<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification`, replacing whatever was visible.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Error => {
                tracing::warn!(key = notification.message_key(), "error toast");
            }
            Severity::Success | Severity::Info => {
                tracing::debug!(key = notification.message_key(), "toast");
            }
        }
        self.current = Some(notification);
    }

    /// Dismisses the visible toast if it has the given ID.
    ///
    /// Returns `true` if the notification was found and removed. IDs of
    /// replaced toasts never match.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id() == id) {
            self.current = None;
            return true;
        }
        false
    }

    /// Dismisses the visible toast once it has expired.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Same as [`Manager::tick`] with an explicit clock.
    pub fn tick_at(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|n| n.is_expired_at(now)) {
            self.current = None;
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns the visible toast, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn has_notification(&self) -> bool {
        self.current.is_some()
    }
}
