// SPDX-License-Identifier: MPL-2.0
//! Deferred screen switches.
//!
//! After an enhancement finishes the app waits a moment before showing the
//! results so the toast can be read. The wait is an abortable task tagged
//! with an id; only the most recent schedule can fire, and any navigation
//! by the user cancels it.

use super::{Message, Screen};
use iced::task::Handle;
use iced::Task;
use std::time::Duration;

/// A scheduled switch that has not fired yet.
#[derive(Debug)]
pub struct PendingNavigation {
    id: u64,
    target: Screen,
    handle: Handle,
}

impl PendingNavigation {
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn target(&self) -> Screen {
        self.target
    }
}

/// Holds at most one [`PendingNavigation`].
#[derive(Debug, Default)]
pub struct DeferredNavigation {
    next_id: u64,
    pending: Option<PendingNavigation>,
}

impl DeferredNavigation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a switch to `target` after `delay`, replacing any earlier
    /// schedule.
    pub fn schedule(&mut self, target: Screen, delay: Duration) -> Task<Message> {
        self.cancel();

        self.next_id += 1;
        let id = self.next_id;

        // The sleep is created on first poll, inside the runtime.
        let (task, handle) = Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |()| Message::NavigationDue(id),
        )
        .abortable();

        tracing::debug!(id, %target, delay_ms = delay.as_millis() as u64, "navigation scheduled");
        self.pending = Some(PendingNavigation { id, target, handle });
        task
    }

    /// Aborts the pending switch, if any.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
            tracing::debug!(id = pending.id, "navigation cancelled");
        }
    }

    /// Consumes the pending switch when `id` matches it. Returns `None` for
    /// stale or cancelled ids.
    pub fn fire(&mut self, id: u64) -> Option<Screen> {
        match &self.pending {
            Some(pending) if pending.id == id => self.pending.take().map(|p| p.target),
            _ => {
                tracing::debug!(id, "ignoring stale navigation");
                None
            }
        }
    }

    #[must_use]
    pub fn pending(&self) -> Option<&PendingNavigation> {
        self.pending.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_secs(1);

    #[test]
    fn fire_with_current_id_returns_target_once() {
        let mut nav = DeferredNavigation::new();
        let _task = nav.schedule(Screen::Results, DELAY);
        let id = nav.pending().map(PendingNavigation::id).expect("pending");

        assert_eq!(nav.fire(id), Some(Screen::Results));
        assert_eq!(nav.fire(id), None);
        assert!(nav.pending().is_none());
    }

    #[test]
    fn rescheduling_makes_previous_id_stale() {
        let mut nav = DeferredNavigation::new();
        let _first = nav.schedule(Screen::Results, DELAY);
        let first_id = nav.pending().map(PendingNavigation::id).expect("pending");
        let _second = nav.schedule(Screen::Results, DELAY);

        assert_eq!(nav.fire(first_id), None);
        assert!(nav.pending().is_some());
    }

    #[test]
    fn cancel_makes_fire_a_no_op() {
        let mut nav = DeferredNavigation::new();
        let _task = nav.schedule(Screen::Results, DELAY);
        let id = nav.pending().map(PendingNavigation::id).expect("pending");

        nav.cancel();
        assert_eq!(nav.fire(id), None);
    }

    #[test]
    fn cancel_without_pending_is_harmless() {
        let mut nav = DeferredNavigation::new();
        nav.cancel();
        assert!(nav.pending().is_none());
    }

    #[test]
    fn pending_reports_target() {
        let mut nav = DeferredNavigation::new();
        let _task = nav.schedule(Screen::Results, DELAY);
        assert_eq!(nav.pending().map(PendingNavigation::target), Some(Screen::Results));
    }
}
