use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn params(density: f64) -> SeedParams {
    SeedParams {
        density,
        min_size: 0.5,
        max_size: 1.0,
        speed: 0.15,
    }
}

#[test]
fn count_follows_area_formula_under_the_cap() {
    assert_eq!(particle_count(800.0, 600.0, 8.0), 96);
    assert_eq!(particle_count(1280.0, 720.0, 4.0), 92);
    assert_eq!(particle_count(400.0, 300.0, 1.0), 3);
}

#[test]
fn count_is_capped() {
    assert_eq!(particle_count(2000.0, 2000.0, 10.0), 100);
    assert_eq!(particle_count(1e6, 1e6, 1e6), PARTICLE_CAP);
}

#[test]
fn count_is_zero_for_degenerate_inputs() {
    assert_eq!(particle_count(0.0, 600.0, 8.0), 0);
    assert_eq!(particle_count(800.0, -1.0, 8.0), 0);
    assert_eq!(particle_count(800.0, 600.0, 0.0), 0);
    assert_eq!(particle_count(f64::NAN, 600.0, 8.0), 0);
    // Less than one density unit of area.
    assert_eq!(particle_count(100.0, 100.0, 50.0), 0);
}

#[test]
fn fractional_density_rounds_up() {
    // floor(480000 / 40000) = 12; 12 * 0.3 = 3.6 -> 4.
    assert_eq!(particle_count(800.0, 600.0, 0.3), 4);
}

#[test]
fn seeded_values_stay_in_their_ranges() {
    let mut rng = StdRng::seed_from_u64(7);
    let p = SeedParams {
        density: 10.0,
        min_size: 0.5,
        max_size: 2.5,
        speed: 3.0,
    };
    let field = ParticleField::seed(1920.0, 1080.0, p, &mut rng);
    assert_eq!(field.len(), 100);
    for q in field.particles() {
        assert!((0.0..1920.0).contains(&q.position.x));
        assert!((0.0..1080.0).contains(&q.position.y));
        assert!((0.5..=2.5).contains(&q.size));
        assert!((0.1..=0.4).contains(&q.opacity));
        assert!(q.velocity.x.abs() <= 0.1 * 3.0);
        assert!(q.velocity.y.abs() <= 0.1 * 3.0);
    }
}

#[test]
fn reseeding_keeps_count_but_not_positions() {
    let mut rng = StdRng::seed_from_u64(1);
    let a = ParticleField::seed(800.0, 600.0, params(8.0), &mut rng);
    let b = ParticleField::seed(800.0, 600.0, params(8.0), &mut rng);
    assert_eq!(a.len(), 96);
    assert_eq!(a.len(), b.len());
    assert_ne!(a.particles(), b.particles());
}

#[test]
fn same_rng_seed_reproduces_the_field() {
    let a = ParticleField::seed(800.0, 600.0, params(8.0), &mut StdRng::seed_from_u64(99));
    let b = ParticleField::seed(800.0, 600.0, params(8.0), &mut StdRng::seed_from_u64(99));
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn zero_area_seeds_nothing_and_advance_is_a_no_op() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut field = ParticleField::seed(0.0, 0.0, params(8.0), &mut rng);
    assert!(field.is_empty());
    field.advance(0.0, 0.0);
    assert!(field.is_empty());
}

#[test]
fn advance_keeps_every_particle_inside_for_many_frames() {
    let mut rng = StdRng::seed_from_u64(11);
    let p = SeedParams {
        density: 10.0,
        min_size: 0.5,
        max_size: 1.0,
        speed: 500.0,
    };
    let mut field = ParticleField::seed(320.0, 240.0, p, &mut rng);
    assert!(!field.is_empty());
    for _ in 0..500 {
        field.advance(320.0, 240.0);
        for q in field.particles() {
            assert!((0.0..320.0).contains(&q.position.x), "x={}", q.position.x);
            assert!((0.0..240.0).contains(&q.position.y), "y={}", q.position.y);
        }
    }
}

#[test]
fn advance_applies_velocity_verbatim_inside_bounds() {
    let mut field = ParticleField::from_particles(vec![Particle {
        position: Point::new(10.0, 10.0),
        velocity: Vec2::new(0.5, -0.25),
        size: 1.0,
        opacity: 0.3,
    }]);
    field.advance(100.0, 100.0);
    assert_eq!(field.particles()[0].position, Point::new(10.5, 9.75));
}
