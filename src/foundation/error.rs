/// Convenience result type used across postmotion.
pub type MotionResult<T> = Result<T, MotionError>;

/// Top-level error type for fallible store, validation and evaluation operations.
///
/// The evaluator and the playback clock never produce errors; they degrade to defaults.
#[derive(thiserror::Error, Debug)]
pub enum MotionError {
    /// A record or argument violated an invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// A referenced element or keyframe does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Frame evaluation was asked for something it cannot produce.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// JSON decoding or encoding failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MotionError {
    /// Build a [`MotionError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MotionError::NotFound`].
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Build a [`MotionError::Evaluation`].
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`MotionError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for MotionError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
