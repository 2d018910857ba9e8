/// Convenience result type used across clipstitch.
pub type StitchResult<T> = Result<T, StitchError>;

/// Top-level error taxonomy used by the stitching APIs.
///
/// Numeric edge cases (degenerate transition lengths, unknown curve or blend names) never
/// surface here; they are clamped or fall back to a default variant.
#[derive(thiserror::Error, Debug)]
pub enum StitchError {
    /// Invalid user-provided frame data or parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Two frames or sequences that must share a shape do not.
    #[error("shape error: {0}")]
    Shape(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StitchError {
    /// Build a [`StitchError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StitchError::Shape`] value.
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }

    /// Build a [`StitchError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
