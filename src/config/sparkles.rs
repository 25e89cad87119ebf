use super::{Background, check_finite, check_non_negative, read_json, read_json_path};
use crate::foundation::color::Rgb8;
use crate::foundation::error::{SparkError, SparkResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options of the sparkles effect.
///
/// JSON keys are camelCase (`minSize`, `particleDensity`, ...). Missing keys take the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SparklesConfig {
    /// Identifier assigned to the surface. No behavioral effect.
    pub id: String,
    /// Background of the surface element.
    pub background: Background,
    /// Lower bound of the per-particle radius at spawn.
    pub min_size: f64,
    /// Upper bound of the per-particle radius at spawn.
    pub max_size: f64,
    /// Spawn-count multiplier per 40 000 px² of viewport. Above 10, connections are drawn.
    pub particle_density: f64,
    /// Fill and stroke color.
    pub particle_color: Rgb8,
    /// Velocity scale.
    pub speed: f64,
    /// Draw-time radius multiplier.
    pub particle_size: f64,
}

impl Default for SparklesConfig {
    fn default() -> Self {
        Self {
            id: "sparkles".to_owned(),
            background: Background::Transparent,
            min_size: 0.5,
            max_size: 1.0,
            particle_density: 8.0,
            particle_color: Rgb8::new(0x29, 0x80, 0xB9),
            speed: 0.15,
            particle_size: 1.2,
        }
    }
}

impl SparklesConfig {
    /// Parse from a JSON reader and validate.
    pub fn from_reader<R: std::io::Read>(r: R) -> SparkResult<Self> {
        let cfg: Self = read_json(r, "sparkles config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse from a JSON string and validate.
    pub fn from_json_str(s: &str) -> SparkResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse from a JSON file on disk and validate.
    pub fn from_path(path: impl AsRef<Path>) -> SparkResult<Self> {
        let cfg: Self = read_json_path(path.as_ref(), "sparkles config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject sizes, densities and speeds the field model cannot use.
    pub fn validate(&self) -> SparkResult<()> {
        check_non_negative("minSize", self.min_size)?;
        check_non_negative("maxSize", self.max_size)?;
        if self.min_size > self.max_size {
            return Err(SparkError::validation(format!(
                "minSize ({}) must be <= maxSize ({})",
                self.min_size, self.max_size
            )));
        }
        check_non_negative("particleDensity", self.particle_density)?;
        check_non_negative("particleSize", self.particle_size)?;
        check_finite("speed", self.speed)?;
        Ok(())
    }

    /// Connections are only attempted for dense fields.
    pub fn draws_connections(&self) -> bool {
        self.particle_density > 10.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/sparkles.rs"]
mod tests;
