use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn seed_scales_with_the_shorter_side() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut field = InteractiveField::new(300);
    field.seed(800.0, 600.0, &mut rng);
    assert_eq!(field.particles().len(), 60);

    field.seed(1000.0, 605.0, &mut rng);
    assert_eq!(field.particles().len(), 61);

    field.seed(0.0, 605.0, &mut rng);
    assert!(field.particles().is_empty());
}

#[test]
fn seeded_opacity_and_size_ranges() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut field = InteractiveField::new(300);
    field.seed(640.0, 480.0, &mut rng);
    for p in field.particles() {
        assert!((0.1..0.6).contains(&p.opacity));
        assert!((1.0..4.0).contains(&p.size));
    }
}

#[test]
fn clicks_never_exceed_the_bound_and_evict_oldest_first() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut field = InteractiveField::new(40);
    field.seed(300.0, 300.0, &mut rng);
    assert_eq!(field.particles().len(), 30);
    let first_seeded = field.particles()[0];

    for _ in 0..10 {
        field.clicked(Point::new(150.0, 150.0), &mut rng);
        assert!(field.particles().len() <= 40);
    }
    assert_eq!(field.particles().len(), 40);
    assert!(!field.particles().contains(&first_seeded));
    // Every survivor came from a burst at the click point.
    assert!(
        field
            .particles()
            .iter()
            .all(|p| p.position == Point::new(150.0, 150.0))
    );
}

#[test]
fn pointer_samples_are_last_write_wins() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut field = InteractiveField::new(10);
    field.pointer_moved(Point::new(1.0, 2.0), &mut rng);
    field.pointer_moved(Point::new(30.0, 40.0), &mut rng);
    assert_eq!(field.pointer(), Some(Point::new(30.0, 40.0)));
    field.pointer_left();
    assert_eq!(field.pointer(), None);
}

#[test]
fn pointer_moves_spawn_roughly_one_in_five() {
    let mut rng = StdRng::seed_from_u64(12);
    let mut field = InteractiveField::new(10_000);
    for i in 0..1000 {
        field.pointer_moved(Point::new(f64::from(i % 100), 5.0), &mut rng);
    }
    let n = field.particles().len();
    assert!((120..=280).contains(&n), "spawned {n}");
}

#[test]
fn particles_near_the_pointer_are_pushed_away() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut field = InteractiveField::new(10);
    field.particles.push(Particle {
        position: Point::new(100.0, 100.0),
        velocity: Vec2::ZERO,
        size: 1.0,
        opacity: 0.5,
    });
    field.pointer.record(Point::new(150.0, 100.0));
    field.advance(1000.0, 1000.0, &mut rng);
    // Pointer is to the right, so the particle gains leftward velocity.
    assert!(field.particles()[0].velocity.x < -0.3);
}

#[test]
fn advance_wraps_and_damps() {
    let mut rng = StdRng::seed_from_u64(21);
    let mut field = InteractiveField::new(300);
    field.seed(200.0, 100.0, &mut rng);
    for _ in 0..200 {
        field.advance(200.0, 100.0, &mut rng);
        for p in field.particles() {
            assert!((0.0..200.0).contains(&p.position.x));
            assert!((0.0..100.0).contains(&p.position.y));
        }
    }
}
