use crate::field::Particle;
use crate::foundation::color::{Rgb8, Rgba};
use crate::foundation::core::{Point, Rect};
use crate::render::surface::{DrawOp, PaintSurface};

/// Pairs closer than this are linked in the trails pass.
pub const TRAIL_LINK_DISTANCE: f64 = 150.0;
const TRAIL_LINK_ALPHA: f64 = 0.05;
const TRAIL_LINK_WIDTH: f64 = 0.5;
const GLOW_INNER_RADIUS: f64 = 10.0;
const GLOW_OUTER_RADIUS: f64 = 150.0;
const GLOW_ALPHA: f64 = 0.2;

/// Translucent wash painted instead of a clear, leaving motion trails.
pub fn trail_wash() -> Rgba {
    Rgba::new(10, 10, 10, 0.1)
}

/// Draw one trails frame over the previous one.
///
/// Every pair is checked here; the population bound of the interactive field keeps that
/// affordable.
pub fn draw_trails<S>(
    surface: &mut S,
    bounds: Rect,
    particles: &[Particle],
    pointer: Option<Point>,
    color: Rgb8,
) where
    S: PaintSurface + ?Sized,
{
    surface.draw(DrawOp::FillRect {
        rect: bounds,
        color: trail_wash(),
    });

    for p in particles {
        surface.draw(DrawOp::FillCircle {
            center: p.position,
            radius: p.size,
            color: color.with_alpha(p.opacity),
        });
    }

    let link = color.with_alpha(TRAIL_LINK_ALPHA);
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            if a.position.distance(b.position) < TRAIL_LINK_DISTANCE {
                surface.draw(DrawOp::StrokeLine {
                    from: a.position,
                    to: b.position,
                    width: TRAIL_LINK_WIDTH,
                    color: link,
                });
            }
        }
    }

    if let Some(center) = pointer {
        surface.draw(DrawOp::RadialGlow {
            center,
            inner_radius: GLOW_INNER_RADIUS,
            outer_radius: GLOW_OUTER_RADIUS,
            inner: color.with_alpha(GLOW_ALPHA),
            outer: trail_wash().rgb().with_alpha(0.0),
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/trails.rs"]
mod tests;
