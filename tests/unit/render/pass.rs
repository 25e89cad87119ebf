use super::*;
use crate::foundation::core::{Point, Vec2};
use crate::render::RecordingSurface;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Yields the same word forever: `0` always samples, `u64::MAX` never does.
struct ConstRng(u64);

impl rand::RngCore for ConstRng {
    fn next_u32(&mut self) -> u32 {
        self.0 as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for (i, b) in dst.iter_mut().enumerate() {
            *b = self.0.to_le_bytes()[i % 8];
        }
    }
}

fn at(x: f64, y: f64) -> Particle {
    Particle {
        position: Point::new(x, y),
        velocity: Vec2::ZERO,
        size: 1.0,
        opacity: 0.3,
    }
}

/// Stride positions on a line 10 px apart, everything else far away.
fn line_of_searchers(n: usize) -> Vec<Particle> {
    (0..n)
        .map(|i| {
            if i % CONNECTION_STRIDE == 0 {
                at((i / CONNECTION_STRIDE) as f64 * 10.0, 0.0)
            } else {
                at(5000.0 + i as f64 * 100.0, 5000.0)
            }
        })
        .collect()
}

#[test]
fn alpha_fades_linearly_to_the_threshold() {
    assert_eq!(connection_alpha(0.0), Some(0.05));
    assert_eq!(connection_alpha(60.0), Some(0.0));
    assert!((connection_alpha(30.0).unwrap() - 0.025).abs() < 1e-12);
    assert_eq!(connection_alpha(60.01), None);
    assert_eq!(connection_alpha(-1.0), None);
}

#[test]
fn searchers_take_at_most_two_forward_partners_at_stride() {
    let particles = line_of_searchers(20);
    let conns = sample_connections(&particles, &mut ConstRng(0));
    let pairs: Vec<(usize, usize)> = conns.iter().map(|c| (c.from, c.to)).collect();
    assert_eq!(pairs, vec![(0, 5), (0, 10), (5, 10), (5, 15), (10, 15)]);
    assert!((conns[0].alpha - 0.05 * (1.0 - 10.0 / 60.0)).abs() < 1e-12);
    assert!((conns[1].alpha - 0.05 * (1.0 - 20.0 / 60.0)).abs() < 1e-12);
}

#[test]
fn no_search_when_the_coin_says_no() {
    let particles = line_of_searchers(20);
    assert!(sample_connections(&particles, &mut ConstRng(u64::MAX)).is_empty());
}

#[test]
fn pairs_at_or_beyond_the_threshold_are_not_connected() {
    let mut particles = vec![at(0.0, 0.0); 11];
    particles[5] = at(60.0, 0.0);
    particles[10] = at(0.0, 61.0);
    for p in particles.iter_mut().skip(1).take(4) {
        *p = at(900.0, 900.0);
    }
    let conns = sample_connections(&particles, &mut ConstRng(0));
    assert!(conns.iter().all(|c| c.from != 0));
}

#[test]
fn sampling_stays_sparse() {
    let mut rng = StdRng::seed_from_u64(17);
    // Everything coincident: every sampled pair would qualify under a full pairwise check.
    let particles = vec![at(50.0, 50.0); 100];
    let mut searches = 0usize;
    let frames = 400;
    for _ in 0..frames {
        let conns = sample_connections(&particles, &mut rng);
        assert!(conns.len() <= (100 / CONNECTION_STRIDE) * MAX_PARTNERS);
        let mut froms: Vec<usize> = conns.iter().map(|c| c.from).collect();
        froms.dedup();
        assert!(froms.iter().all(|i| i % CONNECTION_STRIDE == 0));
        searches += froms.len();
    }
    // 20 eligible searchers per frame at ~30 %; the last one has no partners.
    let rate = searches as f64 / (frames * 19) as f64;
    assert!((0.22..0.38).contains(&rate), "rate={rate}");
}

#[test]
fn draw_clears_then_fills_each_particle() {
    let style = SparklesStyle {
        color: Rgb8::new(75, 180, 255),
        particle_size: 1.5,
        connections: false,
    };
    let mut p = at(3.0, 4.0);
    p.size = 2.0;
    p.opacity = 0.25;

    let mut surface = RecordingSurface::new();
    surface.begin_frame();
    draw_sparkles(&mut surface, &[p], &style, &mut ConstRng(0));
    surface.end_frame().unwrap();

    let ops = surface.last_frame().unwrap();
    assert_eq!(ops.len(), 2);
    assert_eq!(ops[0], DrawOp::Clear);
    let DrawOp::FillCircle {
        center,
        radius,
        color,
    } = ops[1]
    else {
        panic!("expected a circle, got {:?}", ops[1]);
    };
    assert_eq!(center, Point::new(3.0, 4.0));
    assert_eq!(radius, 3.0);
    assert_eq!(color.to_css(), "rgba(75, 180, 255, 0.25)");
}

#[test]
fn draw_strokes_sampled_connections_when_enabled() {
    let style = SparklesStyle {
        color: Rgb8::new(1, 2, 3),
        particle_size: 1.0,
        connections: true,
    };
    let particles = line_of_searchers(20);
    let mut surface = RecordingSurface::new();
    surface.begin_frame();
    draw_sparkles(&mut surface, &particles, &style, &mut ConstRng(0));
    surface.end_frame().unwrap();

    let lines: Vec<&DrawOp> = surface
        .last_frame()
        .unwrap()
        .iter()
        .filter(|op| matches!(op, DrawOp::StrokeLine { .. }))
        .collect();
    assert_eq!(lines.len(), 5);
    let DrawOp::StrokeLine { width, from, to, .. } = lines[0] else {
        unreachable!()
    };
    assert_eq!(*width, CONNECTION_WIDTH);
    assert_eq!(*from, Point::new(0.0, 0.0));
    assert_eq!(*to, Point::new(10.0, 0.0));
}

#[test]
fn empty_population_draws_only_the_clear() {
    let style = SparklesStyle::from(&SparklesConfig {
        particle_density: 50.0,
        ..SparklesConfig::default()
    });
    assert!(style.connections);
    let mut surface = RecordingSurface::new();
    surface.begin_frame();
    draw_sparkles(&mut surface, &[], &style, &mut ConstRng(0));
    surface.end_frame().unwrap();
    assert_eq!(surface.last_frame().unwrap(), &[DrawOp::Clear]);
}
