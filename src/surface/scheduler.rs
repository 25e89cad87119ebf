use std::collections::{BTreeMap, BTreeSet};

/// Handle of a pending animation-frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameRequestId(pub u64);

/// Handle of a pending one-shot timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

/// Host scheduling primitives used by a surface manager.
///
/// Callbacks are delivered by the host calling back into the manager
/// ([`super::SurfaceManager::on_frame`], [`super::SurfaceManager::on_timer`],
/// [`super::SurfaceManager::handle_resize`]); the scheduler only tracks what is pending.
pub trait Scheduler {
    /// Ask for one frame callback.
    fn request_frame(&mut self) -> FrameRequestId;
    /// Cancel a frame request. Unknown or already-fired ids are ignored.
    fn cancel_frame(&mut self, id: FrameRequestId);
    /// Arm a one-shot timer firing after `delay_ms`.
    fn set_timer(&mut self, delay_ms: f64) -> TimerId;
    /// Disarm a timer. Unknown or already-fired ids are ignored.
    fn clear_timer(&mut self, id: TimerId);
    /// Start delivering viewport resize events.
    fn add_resize_listener(&mut self);
    /// Stop delivering viewport resize events.
    fn remove_resize_listener(&mut self);
}

/// Counters kept by [`ManualScheduler`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SchedulerStats {
    /// `request_frame` calls.
    pub frames_requested: u64,
    /// `cancel_frame` calls that removed a pending request.
    pub frames_cancelled: u64,
    /// `set_timer` calls.
    pub timers_set: u64,
    /// `clear_timer` calls that disarmed a pending timer.
    pub timers_cleared: u64,
}

/// Virtual-clock scheduler for headless runs and tests.
///
/// Nothing fires on its own: the driver advances the clock, then drains due timers and
/// pending frame requests.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now_ms: f64,
    next_id: u64,
    frames: BTreeSet<FrameRequestId>,
    timers: BTreeMap<TimerId, f64>,
    resize_listeners: usize,
    stats: SchedulerStats,
}

impl ManualScheduler {
    /// Scheduler at time 0 with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Move the clock forward. Negative steps are ignored.
    pub fn advance_by(&mut self, ms: f64) {
        if ms > 0.0 {
            self.now_ms += ms;
        }
    }

    /// Pending frame requests.
    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    /// Armed timers.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Registered resize listeners.
    pub fn resize_listeners(&self) -> usize {
        self.resize_listeners
    }

    /// Return `true` when nothing is pending and no listener is registered.
    pub fn is_idle(&self) -> bool {
        self.frames.is_empty() && self.timers.is_empty() && self.resize_listeners == 0
    }

    /// Call counters.
    pub fn stats(&self) -> SchedulerStats {
        self.stats
    }

    /// Earliest timer deadline, if any.
    pub fn next_deadline_ms(&self) -> Option<f64> {
        self.timers.values().copied().reduce(f64::min)
    }

    /// Remove and return every frame request; each fires once.
    pub fn take_frame_requests(&mut self) -> Vec<FrameRequestId> {
        std::mem::take(&mut self.frames).into_iter().collect()
    }

    /// Remove and return the timers whose deadline has passed, earliest first.
    pub fn take_due_timers(&mut self) -> Vec<TimerId> {
        let now = self.now_ms;
        let mut due: Vec<(TimerId, f64)> = self
            .timers
            .iter()
            .filter(|&(_, &deadline)| deadline <= now)
            .map(|(&id, &deadline)| (id, deadline))
            .collect();
        due.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        for (id, _) in &due {
            self.timers.remove(id);
        }
        due.into_iter().map(|(id, _)| id).collect()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl Scheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameRequestId {
        let id = FrameRequestId(self.next_id());
        self.frames.insert(id);
        self.stats.frames_requested += 1;
        id
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        if self.frames.remove(&id) {
            self.stats.frames_cancelled += 1;
        }
    }

    fn set_timer(&mut self, delay_ms: f64) -> TimerId {
        let id = TimerId(self.next_id());
        self.timers.insert(id, self.now_ms + delay_ms.max(0.0));
        self.stats.timers_set += 1;
        id
    }

    fn clear_timer(&mut self, id: TimerId) {
        if self.timers.remove(&id).is_some() {
            self.stats.timers_cleared += 1;
        }
    }

    fn add_resize_listener(&mut self) {
        self.resize_listeners += 1;
    }

    fn remove_resize_listener(&mut self) {
        self.resize_listeners = self.resize_listeners.saturating_sub(1);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/scheduler.rs"]
mod tests;
