use super::*;
use serde_json::json;

#[test]
fn classifies_css_values() {
    assert_eq!(Background::parse("transparent"), Background::Transparent);
    assert_eq!(Background::parse("  "), Background::Transparent);
    assert_eq!(
        Background::parse("#0a0a0a"),
        Background::Solid(Rgba::new(10, 10, 10, 1.0))
    );
    assert_eq!(
        Background::parse("linear-gradient(red, blue)"),
        Background::Css("linear-gradient(red, blue)".to_owned())
    );
    // Not a valid hex color: kept as an opaque CSS value.
    assert_eq!(Background::parse("#abc"), Background::Css("#abc".to_owned()));
}

#[test]
fn only_solid_backgrounds_paint() {
    assert!(Background::Transparent.solid().is_none());
    assert!(Background::parse("url(x.png)").solid().is_none());
    assert_eq!(
        Background::parse("#ff000080").solid().map(|c| c.to_rgba8()),
        Some([255, 0, 0, 128])
    );
}

#[test]
fn serde_round_trips_through_css_text() {
    let b: Background = serde_json::from_value(json!("#0A0A0A")).unwrap();
    assert_eq!(serde_json::to_value(&b).unwrap(), json!("#0a0a0a"));
    let b: Background = serde_json::from_value(json!("transparent")).unwrap();
    assert_eq!(b, Background::Transparent);
}
