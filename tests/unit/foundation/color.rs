use super::*;
use serde_json::json;

#[test]
fn parses_hex_into_components() {
    assert_eq!(Rgb8::parse_hex("#4BB4FF").unwrap(), Rgb8::new(75, 180, 255));
    assert_eq!(Rgb8::parse_hex("2980b9").unwrap(), Rgb8::new(41, 128, 185));
}

#[test]
fn rejects_malformed_hex() {
    assert!(Rgb8::parse_hex("#fff").is_err());
    assert!(Rgb8::parse_hex("#12345g").is_err());
    assert!(Rgb8::parse_hex("#+12345").is_err());
    assert!(Rgba::parse_hex("#1234567").is_err());
    assert!(Rgb8::parse_hex("#ééé").is_err());
}

#[test]
fn rgba_hex_carries_alpha() {
    let c = Rgba::parse_hex("#0000ff80").unwrap();
    assert_eq!(c.rgb(), Rgb8::new(0, 0, 255));
    assert!((c.a - 128.0 / 255.0).abs() < 1e-9);
}

#[test]
fn css_notation_matches_canvas_fill_style() {
    let c = Rgb8::new(75, 180, 255).with_alpha(0.25);
    assert_eq!(c.to_css(), "rgba(75, 180, 255, 0.25)");
}

#[test]
fn premul_scales_channels() {
    assert_eq!(Rgba::new(255, 0, 128, 0.5).to_rgba8_premul(), [128, 0, 64, 128]);
    assert_eq!(Rgba::new(10, 20, 30, 0.0).to_rgba8_premul(), [0, 0, 0, 0]);
}

#[test]
fn serde_uses_hex_strings() {
    let c: Rgb8 = serde_json::from_value(json!("#4BB4FF")).unwrap();
    assert_eq!(c, Rgb8::new(75, 180, 255));
    assert_eq!(serde_json::to_value(c).unwrap(), json!("#4bb4ff"));
    assert!(serde_json::from_value::<Rgb8>(json!("blue")).is_err());
}
