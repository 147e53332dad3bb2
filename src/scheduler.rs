//! Redraw scheduling.
//!
//! The clock refreshes itself: every rendered frame asks for exactly one
//! follow-up frame after [`REDRAW_INTERVAL`](crate::config::REDRAW_INTERVAL).
//! The host decides how that request is honored through [`RedrawScheduler`];
//! the simulator uses [`RefreshTimer`], a single-deadline timer polled from
//! its event loop.
//!
//! # Timeline
//!
//! ```text
//! attach ──► schedule(0) ──► render ──► schedule(500ms) ──► render ──► ...
//!                                                    detach ──► cancel
//! ```

use std::time::{Duration, Instant};

/// Host-side hook for "draw me again after `delay`".
pub trait RedrawScheduler {
    /// Request one redraw after `delay`. Replaces any pending request.
    fn schedule_redraw(
        &mut self,
        delay: Duration,
    );

    /// Drop any pending request.
    fn cancel(&mut self);
}

/// Single-deadline timer for polling event loops.
#[derive(Clone, Copy, Debug, Default)]
pub struct RefreshTimer {
    deadline: Option<Instant>,
}

impl RefreshTimer {
    pub const fn new() -> Self { Self { deadline: None } }

    /// Whether a redraw is pending.
    #[inline]
    pub const fn is_pending(&self) -> bool { self.deadline.is_some() }

    /// Arm the timer `delay` after `now`.
    #[inline]
    pub fn schedule_at(
        &mut self,
        now: Instant,
        delay: Duration,
    ) {
        self.deadline = Some(now + delay);
    }

    /// Whether the pending deadline has passed at `now`.
    #[inline]
    pub fn is_due(
        &self,
        now: Instant,
    ) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Time left until the pending deadline. `None` when idle.
    #[inline]
    pub fn time_until_due(
        &self,
        now: Instant,
    ) -> Option<Duration> {
        self.deadline.map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Consume the deadline if it has passed. Returns `true` when a redraw is due.
    pub fn take_due(
        &mut self,
        now: Instant,
    ) -> bool {
        let due = self.is_due(now);
        if due {
            self.deadline = None;
        }
        due
    }
}

impl RedrawScheduler for RefreshTimer {
    fn schedule_redraw(
        &mut self,
        delay: Duration,
    ) {
        self.schedule_at(Instant::now(), delay);
    }

    fn cancel(&mut self) { self.deadline = None; }
}
