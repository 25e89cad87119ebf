use super::*;

fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
    Particle {
        position: Point::new(x, y),
        velocity: Vec2::new(vx, vy),
        size: 1.0,
        opacity: 0.2,
    }
}

#[test]
fn wrap_axis_reenters_from_opposite_edge() {
    assert_eq!(wrap_axis(-1.0, 100.0), 99.0);
    assert_eq!(wrap_axis(100.0, 100.0), 0.0);
    assert_eq!(wrap_axis(150.0, 100.0), 0.0);
    assert_eq!(wrap_axis(42.5, 100.0), 42.5);
    assert_eq!(wrap_axis(0.0, 100.0), 0.0);
}

#[test]
fn wrap_axis_stays_below_bound_for_tiny_negative_values() {
    let v = wrap_axis(-1e-17, 800.0);
    assert!((0.0..800.0).contains(&v));
}

#[test]
fn wrap_axis_handles_far_excursions_and_degenerate_bounds() {
    let v = wrap_axis(-5000.0, 800.0);
    assert!((0.0..800.0).contains(&v));
    assert_eq!(wrap_axis(5.0, 0.0), 0.0);
    assert_eq!(wrap_axis(5.0, -3.0), 0.0);
    assert_eq!(wrap_axis(f64::NAN, 10.0), 0.0);
}

#[test]
fn advance_moves_then_wraps_each_axis_independently() {
    let mut p = particle(0.05, 599.95, -0.1, 0.1);
    p.advance(800.0, 600.0);
    assert!((p.position.x - 799.95).abs() < 1e-9);
    assert_eq!(p.position.y, 0.0);
}
