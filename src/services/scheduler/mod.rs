//! Single-slot scheduler for delayed focus hand-offs.
//!
//! A picker has at most one pending delayed task. Scheduling replaces any
//! pending one, and hosts poll [`FocusSchedule::take_due`] from their event
//! loop to collect it once its deadline passes.

use std::time::{Duration, Instant};

/// Dialog open/close transition length.
pub const TRANSITION: Duration = Duration::from_millis(300);

/// Delay before focus returns to the trigger after closing; outlasts the exit
/// animation so screen readers settle first.
pub const FOCUS_RETURN_DELAY: Duration = Duration::from_millis(500);

/// Where a delayed focus move should land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// The input text field.
    Input,
    /// The button that toggles the dialog.
    TriggerButton,
    /// The month selector in the dialog header.
    MonthSelect,
    /// The first focusable element inside the dialog (the close button).
    FirstFocusable,
    /// The grid cell of the focused day.
    FocusedDay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingFocus {
    target: FocusTarget,
    due_at: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct FocusSchedule {
    pending: Option<PendingFocus>,
}

impl FocusSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `target` to receive focus `delay` after `now`, superseding any
    /// pending task.
    pub fn schedule(&mut self, target: FocusTarget, now: Instant, delay: Duration) {
        if let Some(previous) = self.pending.take() {
            log::trace!("Superseding pending focus to {:?}", previous.target);
        }
        self.pending = Some(PendingFocus {
            target,
            due_at: now + delay,
        });
    }

    /// Drop any pending task. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn pending_target(&self) -> Option<FocusTarget> {
        self.pending.map(|p| p.target)
    }

    /// Time left until the pending task is due, zero when overdue.
    pub fn next_due_in(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|p| p.due_at.saturating_duration_since(now))
    }

    /// Remove and return the pending target if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<FocusTarget> {
        match self.pending {
            Some(pending) if now >= pending.due_at => {
                self.pending = None;
                Some(pending.target)
            }
            _ => None,
        }
    }
}
