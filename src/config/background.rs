use crate::foundation::color::Rgba;
use serde::{Deserialize, Serialize};

/// Background of the surface element, beneath everything the effect draws.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Background {
    /// No background (`"transparent"`).
    #[default]
    Transparent,
    /// A hex color, `#RRGGBB` or `#RRGGBBAA`.
    Solid(Rgba),
    /// Any other CSS background value. Kept verbatim for hosts that understand it; the CPU
    /// raster backend treats it as transparent.
    Css(String),
}

impl Background {
    /// Classify a CSS background value.
    pub fn parse(s: &str) -> Self {
        let t = s.trim();
        if t.is_empty() || t.eq_ignore_ascii_case("transparent") {
            return Self::Transparent;
        }
        if t.starts_with('#')
            && let Ok(c) = Rgba::parse_hex(t)
        {
            return Self::Solid(c);
        }
        Self::Css(t.to_owned())
    }

    /// Solid fill color, if the raster backend can paint this background.
    pub fn solid(&self) -> Option<Rgba> {
        match self {
            Self::Solid(c) => Some(*c),
            Self::Transparent | Self::Css(_) => None,
        }
    }

    /// CSS text for this background.
    pub fn to_css(&self) -> String {
        match self {
            Self::Transparent => "transparent".to_owned(),
            Self::Solid(c) => {
                let [r, g, b, a] = c.to_rgba8();
                if a == 255 {
                    format!("#{r:02x}{g:02x}{b:02x}")
                } else {
                    format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
                }
            }
            Self::Css(s) => s.clone(),
        }
    }
}

impl Serialize for Background {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Background {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/background.rs"]
mod tests;
