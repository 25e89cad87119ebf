use crate::foundation::error::{SparkError, SparkResult};
use crate::foundation::math::{mul_div255_u8, unit_to_u8};
use serde::{Deserialize, Serialize};

/// An opaque sRGB color, as configured by `#RRGGBB` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional, hex digits are case-insensitive).
    pub fn parse_hex(s: &str) -> SparkResult<Self> {
        let digits = strip_hash(s);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(SparkError::validation(format!(
                "hex color must be #RRGGBB, got \"{s}\""
            )));
        }
        Ok(Self {
            r: hex_byte(&digits[0..2])?,
            g: hex_byte(&digits[2..4])?,
            b: hex_byte(&digits[4..6])?,
        })
    }

    /// Attach a straight (non-premultiplied) alpha in `[0, 1]`.
    pub fn with_alpha(self, a: f64) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a: a.clamp(0.0, 1.0),
        }
    }

    /// `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// sRGB color with straight alpha, the paint used by every draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha in `[0, 1]`.
    pub a: f64,
}

impl Rgba {
    /// Build a color from channels and a unit alpha.
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Rgb8::new(r, g, b).with_alpha(a)
    }

    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0.0)
    }

    /// Opaque channels without the alpha.
    pub fn rgb(self) -> Rgb8 {
        Rgb8::new(self.r, self.g, self.b)
    }

    /// Same color with the alpha multiplied by `k`.
    pub fn fade(self, k: f64) -> Self {
        self.rgb().with_alpha(self.a * k)
    }

    /// CSS functional notation, e.g. `rgba(75, 180, 255, 0.3)`.
    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    /// Straight RGBA8.
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, unit_to_u8(self.a)]
    }

    /// Premultiplied RGBA8.
    pub fn to_rgba8_premul(self) -> [u8; 4] {
        let a = unit_to_u8(self.a);
        let a16 = u16::from(a);
        [
            mul_div255_u8(u16::from(self.r), a16),
            mul_div255_u8(u16::from(self.g), a16),
            mul_div255_u8(u16::from(self.b), a16),
            a,
        ]
    }

    /// Parse `#RRGGBB` (opaque) or `#RRGGBBAA`.
    pub fn parse_hex(s: &str) -> SparkResult<Self> {
        let digits = strip_hash(s);
        if !digits.is_ascii() {
            return Err(SparkError::validation(format!("invalid hex color \"{s}\"")));
        }
        match digits.len() {
            6 => Ok(Rgb8::parse_hex(digits)?.with_alpha(1.0)),
            8 => {
                let rgb = Rgb8::parse_hex(&digits[0..6])?;
                let a = hex_byte(&digits[6..8])?;
                Ok(rgb.with_alpha(f64::from(a) / 255.0))
            }
            _ => Err(SparkError::validation(format!(
                "hex color must be #RRGGBB or #RRGGBBAA, got \"{s}\""
            ))),
        }
    }
}

fn strip_hash(s: &str) -> &str {
    let s = s.trim();
    s.strip_prefix('#').unwrap_or(s)
}

fn hex_byte(pair: &str) -> SparkResult<u8> {
    if !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(SparkError::validation(format!("invalid hex byte \"{pair}\"")));
    }
    u8::from_str_radix(pair, 16)
        .map_err(|_| SparkError::validation(format!("invalid hex byte \"{pair}\"")))
}

impl Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
