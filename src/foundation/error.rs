/// Convenience result type used across memeframe.
pub type MemeframeResult<T> = Result<T, MemeframeError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum MemeframeError {
    /// A frame or content dimension is non-positive or non-finite.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Invalid user-provided caption document or style data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while drawing onto a caption surface.
    #[error("render error: {0}")]
    Render(String),

    /// Errors raised by a speech capability implementation.
    #[error("speech error: {0}")]
    Speech(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MemeframeError {
    /// Build a [`MemeframeError::InvalidDimensions`] value.
    pub fn invalid_dimensions(msg: impl Into<String>) -> Self {
        Self::InvalidDimensions(msg.into())
    }

    /// Build a [`MemeframeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MemeframeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`MemeframeError::Speech`] value.
    pub fn speech(msg: impl Into<String>) -> Self {
        Self::Speech(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
