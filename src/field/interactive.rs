use super::Particle;
use crate::foundation::core::{Point, Vec2};
use rand::Rng;
use std::f64::consts::TAU;

/// Pointer repulsion radius, in CSS pixels.
pub(crate) const REPULSE_RADIUS: f64 = 150.0;
const REPULSE_FORCE: f64 = 0.5;
const DAMPING: f64 = 0.99;
const KICK_PROBABILITY: f64 = 0.01;
const SPAWN_ON_MOVE_PROBABILITY: f64 = 0.2;
const CLICK_BURST: usize = 15;

/// Most recent pointer sample. Last write wins; there is no history.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    position: Option<Point>,
}

impl PointerState {
    /// Record a new sample, replacing the previous one.
    pub fn record(&mut self, p: Point) {
        self.position = Some(p);
    }

    /// Forget the pointer (it left the surface).
    pub fn clear(&mut self) {
        self.position = None;
    }

    /// The latest sample, if any.
    pub fn position(&self) -> Option<Point> {
        self.position
    }
}

/// Pointer-reactive population with damping, random kicks and spawning on interaction.
///
/// Unlike [`super::ParticleField`], the population grows on pointer events. It is bounded
/// by `max_particles`; once full, the oldest particles are evicted first.
#[derive(Debug, Clone)]
pub struct InteractiveField {
    particles: Vec<Particle>,
    pointer: PointerState,
    max_particles: usize,
}

impl InteractiveField {
    /// An empty field bounded to `max_particles` (at least 1).
    pub fn new(max_particles: usize) -> Self {
        Self {
            particles: Vec::new(),
            pointer: PointerState::default(),
            max_particles: max_particles.max(1),
        }
    }

    /// Replace the population with `ceil(min(width, height) / 10)` drifting particles.
    pub fn seed<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.particles.clear();
        let shortest = width.min(height);
        if !(shortest.is_finite() && shortest > 0.0) {
            return;
        }
        let count = ((shortest / 10.0).ceil() as usize).min(self.max_particles);
        for _ in 0..count {
            let position = Point::new(rng.random::<f64>() * width, rng.random::<f64>() * height);
            let velocity = Vec2::new(rng.random::<f64>() - 0.5, rng.random::<f64>() - 0.5);
            let size = rng.random::<f64>() * 3.0 + 1.0;
            self.particles.push(spawn(position, velocity, size, rng));
        }
        tracing::debug!(count, "seeded interactive field");
    }

    /// One frame: move, pointer repulsion, wrap, damping, occasional random kick.
    pub fn advance<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        let pointer = self.pointer.position();
        for p in &mut self.particles {
            p.position += p.velocity;

            if let Some(m) = pointer {
                let d = m - p.position;
                if d.hypot() < REPULSE_RADIUS {
                    p.velocity -= Vec2::from_angle(d.atan2()) * REPULSE_FORCE;
                }
            }

            p.wrap(width, height);
            p.velocity *= DAMPING;

            if rng.random::<f64>() < KICK_PROBABILITY {
                p.velocity += Vec2::new(
                    (rng.random::<f64>() - 0.5) * 0.5,
                    (rng.random::<f64>() - 0.5) * 0.5,
                );
            }
        }
    }

    /// Record the pointer and, one time in five, drop a particle under it.
    pub fn pointer_moved<R: Rng + ?Sized>(&mut self, at: Point, rng: &mut R) {
        self.pointer.record(at);
        if rng.random::<f64>() < SPAWN_ON_MOVE_PROBABILITY {
            let size = rng.random::<f64>() * 3.0 + 1.0;
            let velocity = Vec2::new(
                (rng.random::<f64>() - 0.5) * 2.0,
                (rng.random::<f64>() - 0.5) * 2.0,
            );
            let p = spawn(at, velocity, size, rng);
            self.push_bounded(std::iter::once(p));
        }
    }

    /// Burst of particles flying outward from `at`.
    pub fn clicked<R: Rng + ?Sized>(&mut self, at: Point, rng: &mut R) {
        let mut burst = Vec::with_capacity(CLICK_BURST);
        for _ in 0..CLICK_BURST {
            let angle = rng.random::<f64>() * TAU;
            let speed = rng.random::<f64>() * 5.0 + 2.0;
            let size = rng.random::<f64>() * 4.0 + 2.0;
            burst.push(spawn(at, Vec2::from_angle(angle) * speed, size, rng));
        }
        self.push_bounded(burst);
    }

    /// The pointer left the surface.
    pub fn pointer_left(&mut self) {
        self.pointer.clear();
    }

    fn push_bounded(&mut self, new: impl IntoIterator<Item = Particle>) {
        self.particles.extend(new);
        let excess = self.particles.len().saturating_sub(self.max_particles);
        if excess > 0 {
            self.particles.drain(..excess);
        }
    }

    /// Current particles, oldest first.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Latest pointer sample.
    pub fn pointer(&self) -> Option<Point> {
        self.pointer.position()
    }

    /// Population bound.
    pub fn max_particles(&self) -> usize {
        self.max_particles
    }
}

fn spawn<R: Rng + ?Sized>(position: Point, velocity: Vec2, size: f64, rng: &mut R) -> Particle {
    Particle {
        position,
        velocity,
        size,
        opacity: rng.random::<f64>() * 0.5 + 0.1,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/interactive.rs"]
mod tests;
