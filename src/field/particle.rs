use crate::foundation::core::{Point, Vec2};

/// A single animated point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position in CSS pixels.
    pub position: Point,
    /// Displacement applied on every executed frame.
    pub velocity: Vec2,
    /// Base radius; drawn as `size * particle_size`.
    pub size: f64,
    /// Fill alpha, fixed at creation.
    pub opacity: f64,
}

impl Particle {
    /// Apply one frame of motion, then wrap into `[0, width) x [0, height)`.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.position += self.velocity;
        self.wrap(width, height);
    }

    /// Toroidal wrap of both axes, independently.
    pub fn wrap(&mut self, width: f64, height: f64) {
        self.position.x = wrap_axis(self.position.x, width);
        self.position.y = wrap_axis(self.position.y, height);
    }
}

/// Wrap one coordinate into `[0, bound)`.
///
/// Below 0 re-enters from the opposite edge; at or above `bound` resets to 0. A
/// non-positive bound collapses everything to 0.
pub(crate) fn wrap_axis(v: f64, bound: f64) -> f64 {
    if bound.is_nan() || bound <= 0.0 || !v.is_finite() {
        return 0.0;
    }
    let mut v = v;
    if v < 0.0 {
        v += bound;
        if v < 0.0 {
            v = v.rem_euclid(bound);
        }
    }
    if v >= bound { 0.0 } else { v }
}

#[cfg(test)]
#[path = "../../tests/unit/field/particle.rs"]
mod tests;
