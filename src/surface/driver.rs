use crate::foundation::core::{Point, Viewport};
use crate::render::PaintSurface;
use crate::surface::effect::Effect;
use crate::surface::manager::{FrameOutcome, MountOutcome, SurfaceManager};
use crate::surface::scheduler::ManualScheduler;

/// Host refresh period simulated by [`HeadlessDriver`].
pub const DEFAULT_TICK_MS: f64 = 1000.0 / 60.0;

/// Counts from one [`HeadlessDriver::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Resize timers applied.
    pub resizes: usize,
    /// Frames executed.
    pub drawn: usize,
    /// Frame callbacks skipped by pacing.
    pub skipped: usize,
}

/// Plays the host for a [`SurfaceManager`]: owns a virtual clock and delivers timer and
/// frame callbacks at a fixed refresh rate.
pub struct HeadlessDriver<S, E> {
    sched: ManualScheduler,
    manager: SurfaceManager<S, E>,
    viewport: Viewport,
    tick_ms: f64,
}

impl<S: PaintSurface, E: Effect> HeadlessDriver<S, E> {
    /// Driver at a 60 Hz refresh rate.
    pub fn new(manager: SurfaceManager<S, E>, viewport: Viewport) -> Self {
        Self::with_tick(manager, viewport, DEFAULT_TICK_MS)
    }

    /// Driver delivering one frame callback every `tick_ms`.
    pub fn with_tick(manager: SurfaceManager<S, E>, viewport: Viewport, tick_ms: f64) -> Self {
        Self {
            sched: ManualScheduler::new(),
            manager,
            viewport,
            tick_ms: if tick_ms.is_finite() && tick_ms > 0.0 {
                tick_ms
            } else {
                DEFAULT_TICK_MS
            },
        }
    }

    /// Mount the manager on `surface` at the current viewport.
    pub fn mount(&mut self, surface: Option<S>) -> MountOutcome {
        self.manager
            .initialize(&mut self.sched, self.viewport, surface)
    }

    /// Change the host viewport and emit a resize event.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.manager.handle_resize(&mut self.sched);
    }

    /// Forward a pointer move.
    pub fn pointer_moved(&mut self, at: Point) {
        self.manager.pointer_moved(at);
    }

    /// Forward a click.
    pub fn click(&mut self, at: Point) {
        self.manager.clicked(at);
    }

    /// Forward the pointer leaving the surface.
    pub fn pointer_left(&mut self) {
        self.manager.pointer_left();
    }

    /// Advance the clock by one refresh period, then deliver due timers and pending frames.
    pub fn tick(&mut self) -> TickReport {
        self.sched.advance_by(self.tick_ms);
        let mut report = TickReport::default();

        for id in self.sched.take_due_timers() {
            if self.manager.on_timer(&mut self.sched, id, self.viewport) {
                report.resizes += 1;
            }
        }

        let now = self.sched.now_ms();
        for id in self.sched.take_frame_requests() {
            match self.manager.on_frame(&mut self.sched, id, now) {
                FrameOutcome::Drawn => report.drawn += 1,
                FrameOutcome::Skipped => report.skipped += 1,
                FrameOutcome::Ignored | FrameOutcome::Stopped => {}
            }
        }
        report
    }

    /// Tick until at least `ms` of virtual time has passed.
    pub fn run_for(&mut self, ms: f64) -> TickReport {
        let mut total = TickReport::default();
        let end = self.sched.now_ms() + ms.max(0.0);
        while self.sched.now_ms() < end {
            let r = self.tick();
            total.resizes += r.resizes;
            total.drawn += r.drawn;
            total.skipped += r.skipped;
        }
        total
    }

    /// Tick until `frames` more frames have executed. Gives up after `max_ticks` ticks and
    /// returns the number actually drawn.
    pub fn run_until_drawn(&mut self, frames: u64, max_ticks: usize) -> u64 {
        let start = self.manager.frames_drawn();
        for _ in 0..max_ticks {
            if self.manager.frames_drawn() - start >= frames || !self.manager.is_running() {
                break;
            }
            self.tick();
        }
        self.manager.frames_drawn() - start
    }

    /// Tear the manager down.
    pub fn unmount(&mut self) {
        self.manager.teardown(&mut self.sched);
    }

    /// The managed surface controller.
    pub fn manager(&self) -> &SurfaceManager<S, E> {
        &self.manager
    }

    /// The virtual host scheduler.
    pub fn scheduler(&self) -> &ManualScheduler {
        &self.sched
    }

    /// Current host viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Unmount and return the manager.
    pub fn into_manager(mut self) -> SurfaceManager<S, E> {
        self.unmount();
        self.manager
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/driver.rs"]
mod tests;
