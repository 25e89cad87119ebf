use crate::config::SparklesConfig;
use crate::field::Particle;
use crate::foundation::color::Rgb8;
use crate::render::surface::{DrawOp, PaintSurface};
use rand::Rng;
use smallvec::SmallVec;

/// Pairs farther apart than this are never connected.
pub const CONNECTION_DISTANCE: f64 = 60.0;
/// Stroke alpha of a connection between coincident particles.
pub const CONNECTION_MAX_ALPHA: f64 = 0.05;
/// Stroke width of a connection.
pub const CONNECTION_WIDTH: f64 = 0.2;
/// Only every `CONNECTION_STRIDE`-th particle initiates a search, and only partners at the
/// same stride are sampled.
pub const CONNECTION_STRIDE: usize = 5;
/// Chance that an eligible particle searches for partners on a given frame.
pub const CONNECTION_PROBABILITY: f64 = 0.3;
/// Partners per searching particle.
pub const MAX_PARTNERS: usize = 2;

/// A sampled pair and the stroke alpha it is drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    /// Index of the searching particle.
    pub from: usize,
    /// Index of the partner (always greater than `from`).
    pub to: usize,
    /// Stroke alpha, `0.05 * (1 - distance / 60)`.
    pub alpha: f64,
}

/// Stroke alpha for a pair `distance` pixels apart, or `None` when the pair is too far.
///
/// Fades linearly from `0.05` at distance 0 to `0` at the threshold.
pub fn connection_alpha(distance: f64) -> Option<f64> {
    if !(0.0..=CONNECTION_DISTANCE).contains(&distance) {
        return None;
    }
    Some(CONNECTION_MAX_ALPHA * (1.0 - distance / CONNECTION_DISTANCE))
}

/// Partners of particle `i`: forward indices `i+5, i+10, ...` strictly closer than the
/// threshold, at most [`MAX_PARTNERS`] of them.
fn partners_of(particles: &[Particle], i: usize) -> SmallVec<[Connection; MAX_PARTNERS]> {
    let mut out = SmallVec::new();
    let p = particles[i].position;
    let mut j = i + CONNECTION_STRIDE;
    while j < particles.len() && out.len() < MAX_PARTNERS {
        let d = p.distance(particles[j].position);
        if d < CONNECTION_DISTANCE
            && let Some(alpha) = connection_alpha(d)
        {
            out.push(Connection { from: i, to: j, alpha });
        }
        j += CONNECTION_STRIDE;
    }
    out
}

/// Sparse, randomized subset of connections for one frame.
///
/// Only indices divisible by the stride may search, each with ~30 % probability. At most
/// `len / 5 * 2` pairs are produced and at most `len / 5` particles scan forward, so the
/// cost stays well under the full pairwise check.
pub fn sample_connections<R: Rng + ?Sized>(
    particles: &[Particle],
    rng: &mut R,
) -> Vec<Connection> {
    let mut out = Vec::new();
    for i in (0..particles.len()).step_by(CONNECTION_STRIDE) {
        if rng.random::<f64>() >= CONNECTION_PROBABILITY {
            continue;
        }
        out.extend(partners_of(particles, i));
    }
    out
}

/// Appearance parameters of the sparkles pass, resolved from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparklesStyle {
    /// Fill and stroke color.
    pub color: Rgb8,
    /// Radius multiplier.
    pub particle_size: f64,
    /// Whether connections are sampled at all (density above 10).
    pub connections: bool,
}

impl From<&SparklesConfig> for SparklesStyle {
    fn from(cfg: &SparklesConfig) -> Self {
        Self {
            color: cfg.particle_color,
            particle_size: cfg.particle_size,
            connections: cfg.draws_connections(),
        }
    }
}

/// Draw one sparkles frame: full clear, one disc per particle, then sampled connections.
///
/// An empty population draws only the clear.
pub fn draw_sparkles<S, R>(
    surface: &mut S,
    particles: &[Particle],
    style: &SparklesStyle,
    rng: &mut R,
) where
    S: PaintSurface + ?Sized,
    R: Rng + ?Sized,
{
    surface.draw(DrawOp::Clear);
    for p in particles {
        surface.draw(DrawOp::FillCircle {
            center: p.position,
            radius: p.size * style.particle_size,
            color: style.color.with_alpha(p.opacity),
        });
    }
    if !style.connections {
        return;
    }
    for c in sample_connections(particles, rng) {
        surface.draw(DrawOp::StrokeLine {
            from: particles[c.from].position,
            to: particles[c.to].position,
            width: CONNECTION_WIDTH,
            color: style.color.with_alpha(c.alpha),
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pass.rs"]
mod tests;
