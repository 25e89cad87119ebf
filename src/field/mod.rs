//! Particle populations and their per-frame evolution.

mod interactive;
mod particle;
mod sparkles;

pub use interactive::{InteractiveField, PointerState};
pub use particle::Particle;
pub use sparkles::{AREA_PER_DENSITY_UNIT, PARTICLE_CAP, ParticleField, SeedParams, particle_count};
