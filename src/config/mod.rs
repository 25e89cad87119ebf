//! JSON-facing configuration for the particle effects.

mod background;
mod sparkles;
mod trails;

pub use background::Background;
pub use sparkles::SparklesConfig;
pub use trails::TrailsConfig;

use crate::foundation::error::{SparkError, SparkResult};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub(crate) fn read_json<T: DeserializeOwned>(r: impl std::io::Read, what: &str) -> SparkResult<T> {
    serde_json::from_reader(r).map_err(|e| SparkError::serde(format!("parse {what} JSON: {e}")))
}

pub(crate) fn read_json_path<T: DeserializeOwned>(path: &Path, what: &str) -> SparkResult<T> {
    let f = File::open(path).map_err(|e| {
        SparkError::validation(format!("open {what} JSON '{}': {e}", path.display()))
    })?;
    read_json(BufReader::new(f), what)
}

fn check_finite(name: &str, v: f64) -> SparkResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(SparkError::validation(format!("{name} must be finite")))
    }
}

fn check_non_negative(name: &str, v: f64) -> SparkResult<()> {
    check_finite(name, v)?;
    if v < 0.0 {
        return Err(SparkError::validation(format!("{name} must be >= 0")));
    }
    Ok(())
}
