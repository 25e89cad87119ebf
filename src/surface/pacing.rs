use super::scheduler::{Scheduler, TimerId};

/// Minimum spacing of executed sparkles frames (~15 fps).
pub const SPARKLES_FRAME_INTERVAL_MS: f64 = 66.0;
/// Quiet period before a resize is applied.
pub const RESIZE_DEBOUNCE_MS: f64 = 200.0;

/// Skip-and-reschedule frame throttle, independent of the host refresh rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePacer {
    min_interval_ms: f64,
    last_frame_ms: f64,
}

impl FramePacer {
    /// Run at most one frame per `min_interval_ms`.
    pub fn new(min_interval_ms: f64) -> Self {
        Self {
            min_interval_ms: min_interval_ms.max(0.0),
            last_frame_ms: 0.0,
        }
    }

    /// Run every callback.
    pub fn unpaced() -> Self {
        Self::new(0.0)
    }

    /// Decide whether the callback at `timestamp_ms` executes. Executing records the
    /// timestamp; skipping leaves the pacer untouched.
    pub fn should_run(&mut self, timestamp_ms: f64) -> bool {
        if timestamp_ms - self.last_frame_ms < self.min_interval_ms {
            return false;
        }
        self.last_frame_ms = timestamp_ms;
        true
    }

    /// Forget the last executed frame, as on a fresh mount.
    pub fn reset(&mut self) {
        self.last_frame_ms = 0.0;
    }

    /// Configured minimum spacing.
    pub fn min_interval_ms(&self) -> f64 {
        self.min_interval_ms
    }
}

/// Trailing-edge debounce over one host timer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Debouncer {
    delay_ms: f64,
    pending: Option<TimerId>,
}

impl Debouncer {
    /// Debounce with a `delay_ms` quiet period.
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    /// Restart the quiet period.
    pub fn trigger(&mut self, sched: &mut dyn Scheduler) {
        self.cancel(sched);
        self.pending = Some(sched.set_timer(self.delay_ms));
    }

    /// Consume a fired timer. Returns `true` when it is the one this debouncer armed.
    pub fn fire(&mut self, id: TimerId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Disarm the pending timer, if any.
    pub fn cancel(&mut self, sched: &mut dyn Scheduler) {
        if let Some(id) = self.pending.take() {
            sched.clear_timer(id);
        }
    }

    /// Return `true` while a timer is armed.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/pacing.rs"]
mod tests;
