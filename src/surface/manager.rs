use crate::foundation::core::{Point, Viewport};
use crate::render::PaintSurface;
use crate::surface::effect::Effect;
use crate::surface::pacing::{Debouncer, FramePacer, RESIZE_DEBOUNCE_MS};
use crate::surface::scheduler::{FrameRequestId, Scheduler, TimerId};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Frame loop state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// Before `initialize`, after `teardown`, or inert.
    Stopped,
    /// A frame request is pending.
    Scheduled(FrameRequestId),
}

/// Result of [`SurfaceManager::initialize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountOutcome {
    /// The frame loop is running.
    Running,
    /// No usable drawing context: nothing will be drawn or scheduled.
    Inert,
}

/// What a frame callback did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Stale or cancelled request; nothing happened.
    Ignored,
    /// Too soon after the last executed frame; only rescheduled.
    Skipped,
    /// Advanced and drew one frame, then rescheduled.
    Drawn,
    /// Presenting failed; the manager stopped and went inert.
    Stopped,
}

/// Owns one paint surface and runs an [`Effect`] on it for the surface's mount lifetime.
///
/// The host forwards its events: frame callbacks to [`SurfaceManager::on_frame`], timer
/// expiries to [`SurfaceManager::on_timer`], viewport resizes to
/// [`SurfaceManager::handle_resize`] and pointer input to the `pointer_*` methods. All
/// calls happen on one thread and run to completion; frames are strictly sequential.
pub struct SurfaceManager<S, E> {
    effect: E,
    surface: Option<S>,
    viewport: Viewport,
    pacer: FramePacer,
    resize: Debouncer,
    state: LoopState,
    listening: bool,
    inert: bool,
    rng: StdRng,
    frames_drawn: u64,
    frames_skipped: u64,
}

impl<S: PaintSurface, E: Effect> SurfaceManager<S, E> {
    /// Manager with an OS-seeded random source.
    pub fn new(effect: E) -> Self {
        Self::with_rng(effect, StdRng::from_rng(&mut rand::rng()))
    }

    /// Manager whose particle values and connection sampling are reproducible.
    pub fn with_seed(effect: E, seed: u64) -> Self {
        Self::with_rng(effect, StdRng::seed_from_u64(seed))
    }

    fn with_rng(effect: E, rng: StdRng) -> Self {
        Self {
            pacer: FramePacer::new(effect.frame_interval_ms()),
            effect,
            surface: None,
            viewport: Viewport::css(0.0, 0.0),
            resize: Debouncer::new(RESIZE_DEBOUNCE_MS),
            state: LoopState::Stopped,
            listening: false,
            inert: false,
            rng,
            frames_drawn: 0,
            frames_skipped: 0,
        }
    }

    /// Mount on `surface` sized for `viewport`, seed the effect and request the first frame.
    ///
    /// `None` means the host could not provide a 2D context: the manager goes inert and
    /// never schedules anything. Re-initializing tears the previous mount down first.
    #[tracing::instrument(level = "debug", skip(self, sched, surface))]
    pub fn initialize(
        &mut self,
        sched: &mut dyn Scheduler,
        viewport: Viewport,
        surface: Option<S>,
    ) -> MountOutcome {
        self.teardown(sched);
        self.inert = false;

        let Some(mut surface) = surface else {
            tracing::warn!("no drawing context available; effect disabled");
            self.inert = true;
            return MountOutcome::Inert;
        };

        let viewport = self.effective(viewport);
        if let Err(err) = surface.configure(viewport) {
            tracing::warn!(%err, "surface rejected initial size; effect disabled");
            self.inert = true;
            return MountOutcome::Inert;
        }
        surface.set_background(self.effect.background());
        self.effect.reset(viewport, &mut self.rng);
        self.surface = Some(surface);
        self.viewport = viewport;
        self.pacer.reset();

        sched.add_resize_listener();
        self.listening = true;
        self.state = LoopState::Scheduled(sched.request_frame());
        tracing::debug!(population = self.effect.population(), "surface mounted");
        MountOutcome::Running
    }

    /// Viewport resize event: restart the debounce quiet period.
    pub fn handle_resize(&mut self, sched: &mut dyn Scheduler) {
        if !self.listening {
            return;
        }
        self.resize.trigger(sched);
    }

    /// Timer expiry. Applies the debounced resize for `viewport` when `id` is the pending
    /// resize timer; returns whether it was.
    pub fn on_timer(&mut self, sched: &mut dyn Scheduler, id: TimerId, viewport: Viewport) -> bool {
        if !self.resize.fire(id) {
            return false;
        }
        let viewport = self.effective(viewport);
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        if let Err(err) = surface.configure(viewport) {
            tracing::warn!(%err, "surface rejected resize; effect disabled");
            self.go_inert(sched);
            return false;
        }
        self.effect.resized(viewport, &mut self.rng);
        self.viewport = viewport;
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            population = self.effect.population(),
            "applied resize"
        );
        true
    }

    /// Frame callback for request `id` at host time `timestamp_ms`.
    pub fn on_frame(
        &mut self,
        sched: &mut dyn Scheduler,
        id: FrameRequestId,
        timestamp_ms: f64,
    ) -> FrameOutcome {
        if self.state != LoopState::Scheduled(id) {
            return FrameOutcome::Ignored;
        }
        let Some(surface) = self.surface.as_mut() else {
            self.state = LoopState::Stopped;
            return FrameOutcome::Ignored;
        };

        if !self.pacer.should_run(timestamp_ms) {
            self.frames_skipped += 1;
            self.state = LoopState::Scheduled(sched.request_frame());
            return FrameOutcome::Skipped;
        }

        self.effect.step(self.viewport, &mut self.rng);
        surface.begin_frame();
        self.effect.draw(surface, self.viewport, &mut self.rng);
        if let Err(err) = surface.end_frame() {
            tracing::warn!(%err, "presenting frame failed; effect disabled");
            self.go_inert(sched);
            return FrameOutcome::Stopped;
        }

        self.frames_drawn += 1;
        self.state = LoopState::Scheduled(sched.request_frame());
        FrameOutcome::Drawn
    }

    /// Pointer moved. The next frame sees only the latest sample.
    pub fn pointer_moved(&mut self, at: Point) {
        if self.is_running() {
            self.effect.pointer_moved(at, &mut self.rng);
        }
    }

    /// Pointer clicked.
    pub fn clicked(&mut self, at: Point) {
        if self.is_running() {
            self.effect.clicked(at, &mut self.rng);
        }
    }

    /// Pointer left the surface.
    pub fn pointer_left(&mut self) {
        self.effect.pointer_left();
    }

    /// Cancel the pending resize timer and frame request and drop the resize listener.
    ///
    /// Idempotent, and a no-op before `initialize`.
    pub fn teardown(&mut self, sched: &mut dyn Scheduler) {
        self.resize.cancel(sched);
        if let LoopState::Scheduled(id) = std::mem::replace(&mut self.state, LoopState::Stopped) {
            sched.cancel_frame(id);
        }
        if self.listening {
            sched.remove_resize_listener();
            self.listening = false;
        }
    }

    fn go_inert(&mut self, sched: &mut dyn Scheduler) {
        self.teardown(sched);
        self.inert = true;
    }

    fn effective(&self, viewport: Viewport) -> Viewport {
        if self.effect.honors_pixel_ratio() {
            viewport
        } else {
            viewport.without_pixel_ratio()
        }
    }

    /// Current loop state.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Return `true` while a frame request is pending.
    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Scheduled(_))
    }

    /// Return `true` once the manager has given up on its surface.
    pub fn is_inert(&self) -> bool {
        self.inert
    }

    /// Return `true` while a debounced resize is waiting.
    pub fn resize_pending(&self) -> bool {
        self.resize.is_pending()
    }

    /// Viewport the surface is currently sized for.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The running effect.
    pub fn effect(&self) -> &E {
        &self.effect
    }

    /// The owned surface, once mounted.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Executed frames.
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Callbacks skipped by frame pacing.
    pub fn frames_skipped(&self) -> u64 {
        self.frames_skipped
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/manager.rs"]
mod tests;
