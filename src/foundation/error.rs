/// Convenience result type used across sparkfield.
pub type SparkResult<T> = Result<T, SparkError>;

/// Top-level error taxonomy.
///
/// Frame callbacks never surface these to the host; they are reported by configuration
/// loading, surface construction and the CLI.
#[derive(thiserror::Error, Debug)]
pub enum SparkError {
    /// Invalid user-provided configuration or geometry.
    #[error("validation error: {0}")]
    Validation(String),

    /// The paint surface could not be created or resized.
    #[error("surface error: {0}")]
    Surface(String),

    /// Rasterizing or reading back a frame failed.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error (I/O, etc.).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SparkError {
    /// Build a [`SparkError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SparkError::Surface`].
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`SparkError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SparkError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
