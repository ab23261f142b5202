/// Convenience result type used across Scorch.
pub type ScorchResult<T> = Result<T, ScorchError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum ScorchError {
    /// Invalid user-provided options, rejected before any simulation work.
    #[error("validation error: {0}")]
    Validation(String),

    /// Missing, unreadable, or corrupt font data.
    #[error("font error: {0}")]
    Font(String),

    /// Inconsistent frame or grid data handed to a render stage.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while writing an output container.
    #[error("encode error: {0}")]
    Encode(String),

    /// A render ran past its configured time budget.
    #[error("deadline exceeded: {0}")]
    Deadline(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScorchError {
    /// Build a [`ScorchError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScorchError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`ScorchError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ScorchError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`ScorchError::Deadline`] value.
    pub fn deadline(msg: impl Into<String>) -> Self {
        Self::Deadline(msg.into())
    }

    /// True for errors raised by boundary validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
