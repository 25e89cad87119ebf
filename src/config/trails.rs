use super::{Background, read_json, read_json_path};
use crate::foundation::color::Rgb8;
use crate::foundation::error::{SparkError, SparkResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options of the pointer-reactive trails effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TrailsConfig {
    /// Identifier assigned to the surface. No behavioral effect.
    pub id: String,
    /// Background of the surface element.
    pub background: Background,
    /// Particle, connection and glow color.
    pub particle_color: Rgb8,
    /// Upper bound on the population, including pointer-spawned particles.
    pub max_particles: usize,
}

impl Default for TrailsConfig {
    fn default() -> Self {
        Self {
            id: "trails".to_owned(),
            background: Background::parse("#0a0a0a"),
            particle_color: Rgb8::new(0x4B, 0xB4, 0xFF),
            max_particles: 300,
        }
    }
}

impl TrailsConfig {
    /// Parse from a JSON string and validate.
    pub fn from_json_str(s: &str) -> SparkResult<Self> {
        let cfg: Self = read_json(s.as_bytes(), "trails config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse from a JSON file on disk and validate.
    pub fn from_path(path: impl AsRef<Path>) -> SparkResult<Self> {
        let cfg: Self = read_json_path(path.as_ref(), "trails config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// `maxParticles` must leave room for at least one click burst.
    pub fn validate(&self) -> SparkResult<()> {
        if self.max_particles == 0 {
            return Err(SparkError::validation("maxParticles must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/trails.rs"]
mod tests;
