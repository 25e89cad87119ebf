//! Sparkfield draws ambient particle backgrounds on a 2D paint surface.
//!
//! A [`SurfaceManager`] owns one [`PaintSurface`] for its mount lifetime and runs an
//! [`Effect`] on it:
//!
//! - [`SparklesEffect`]: a density-scaled drifting field with sparse faint connections,
//!   paced to ~15 fps
//! - [`TrailsEffect`]: a pointer-reactive field painted over a fading wash
//!
//! The host drives the manager through a [`Scheduler`] and forwards frame, timer, resize
//! and pointer events. [`HeadlessDriver`] plays that role on a virtual clock, and
//! [`CpuSurface`] rasterizes frames with `vello_cpu`.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// JSON configuration.
pub mod config;
/// Particle populations.
pub mod field;
/// Paint surfaces and draw passes.
pub mod render;
/// Mount lifecycle and frame loop.
pub mod surface;

pub use crate::foundation::color::{Rgb8, Rgba};
pub use crate::foundation::core::{Affine, Point, Rect, Vec2, Viewport};
pub use crate::foundation::error::{SparkError, SparkResult};

pub use crate::config::{Background, SparklesConfig, TrailsConfig};
pub use crate::field::{InteractiveField, Particle, ParticleField, particle_count};
pub use crate::render::{CpuSurface, DrawOp, FrameRGBA, PaintSurface, RecordingSurface};
pub use crate::surface::{
    Effect, FrameOutcome, HeadlessDriver, ManualScheduler, MountOutcome, Scheduler,
    SparklesEffect, SparklesSurface, SurfaceManager, TrailsEffect, TrailsSurface,
};
