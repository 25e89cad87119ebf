//! Surface lifecycle: mounting, frame loop, pacing, debounced resize and teardown.

pub(crate) mod driver;
pub(crate) mod effect;
pub(crate) mod manager;
pub(crate) mod pacing;
pub(crate) mod scheduler;

pub use driver::{DEFAULT_TICK_MS, HeadlessDriver, TickReport};
pub use effect::{Effect, SparklesEffect, TrailsEffect};
pub use manager::{FrameOutcome, LoopState, MountOutcome, SurfaceManager};
pub use pacing::{Debouncer, FramePacer, RESIZE_DEBOUNCE_MS, SPARKLES_FRAME_INTERVAL_MS};
pub use scheduler::{FrameRequestId, ManualScheduler, Scheduler, SchedulerStats, TimerId};

/// Sparkles background running on surface `S`.
pub type SparklesSurface<S> = SurfaceManager<S, SparklesEffect>;

/// Interactive trails running on surface `S`.
pub type TrailsSurface<S> = SurfaceManager<S, TrailsEffect>;
