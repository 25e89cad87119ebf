use super::*;

#[test]
fn defaults_use_dark_background_and_bounded_population() {
    let cfg = TrailsConfig::default();
    assert_eq!(cfg.particle_color, Rgb8::new(75, 180, 255));
    assert_eq!(cfg.max_particles, 300);
    assert_eq!(cfg.background.to_css(), "#0a0a0a");
}

#[test]
fn zero_capacity_is_rejected() {
    let err = TrailsConfig::from_json_str(r#"{ "maxParticles": 0 }"#).unwrap_err();
    assert!(err.to_string().contains("maxParticles"));
    let cfg = TrailsConfig::from_json_str(r#"{ "maxParticles": 50 }"#).unwrap();
    assert_eq!(cfg.max_particles, 50);
}
