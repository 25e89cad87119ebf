use super::Particle;
use crate::config::SparklesConfig;
use crate::foundation::core::{Point, Vec2};
use rand::Rng;

/// Hard cap on the sparkles population, whatever the density.
pub const PARTICLE_CAP: usize = 100;

/// Viewport area (px²) that contributes one density unit.
pub const AREA_PER_DENSITY_UNIT: f64 = 40_000.0;

/// Population size for a `width x height` viewport:
/// `min(floor(width * height / 40000) * density, 100)`.
///
/// Fractional products round up (a partially covered slot still spawns a particle).
/// Degenerate viewports and non-positive densities yield 0.
pub fn particle_count(width: f64, height: f64, density: f64) -> usize {
    if !(width.is_finite() && height.is_finite() && density.is_finite()) {
        return 0;
    }
    if width <= 0.0 || height <= 0.0 || density <= 0.0 {
        return 0;
    }
    let units = (width * height / AREA_PER_DENSITY_UNIT).floor();
    let raw = (units * density).ceil();
    if raw >= PARTICLE_CAP as f64 {
        PARTICLE_CAP
    } else {
        raw as usize
    }
}

/// Inputs of [`ParticleField::seed`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedParams {
    /// Spawn-count multiplier.
    pub density: f64,
    /// Lower radius bound.
    pub min_size: f64,
    /// Upper radius bound.
    pub max_size: f64,
    /// Velocity scale.
    pub speed: f64,
}

impl From<&SparklesConfig> for SeedParams {
    fn from(cfg: &SparklesConfig) -> Self {
        Self {
            density: cfg.particle_density,
            min_size: cfg.min_size,
            max_size: cfg.max_size,
            speed: cfg.speed,
        }
    }
}

/// The sparkles population for one surface.
///
/// The particle count is fixed by [`ParticleField::seed`]; only a reseed changes it.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// A field with no particles, as before the first seed.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Spawn a fresh population sized for `width x height`.
    ///
    /// Positions are uniform in `[0, width) x [0, height)`, sizes in
    /// `[min_size, max_size]`, velocity components in `[-0.1, 0.1) * speed` and opacities
    /// in `[0.1, 0.4)`.
    #[tracing::instrument(level = "debug", skip(rng))]
    pub fn seed<R: Rng + ?Sized>(
        width: f64,
        height: f64,
        params: SeedParams,
        rng: &mut R,
    ) -> Self {
        let count = particle_count(width, height, params.density);
        let size_span = (params.max_size - params.min_size).max(0.0);
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            let position = Point::new(rng.random::<f64>() * width, rng.random::<f64>() * height);
            let size = rng.random::<f64>() * size_span + params.min_size;
            let velocity = Vec2::new(
                (rng.random::<f64>() - 0.5) * 0.2 * params.speed,
                (rng.random::<f64>() - 0.5) * 0.2 * params.speed,
            );
            let opacity = rng.random::<f64>() * 0.3 + 0.1;
            particles.push(Particle {
                position,
                velocity,
                size,
                opacity,
            });
        }
        tracing::debug!(count, "seeded particle field");
        Self { particles }
    }

    /// Move every particle by its velocity and wrap it back into the surface.
    ///
    /// Per-particle and order-independent: no pairwise interaction happens here.
    pub fn advance(&mut self, width: f64, height: f64) {
        for p in &mut self.particles {
            p.advance(width, height);
        }
    }

    /// Current particles, in spawn order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Population size.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Return `true` when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/sparkles.rs"]
mod tests;
