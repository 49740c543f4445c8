//! Error taxonomy for the core calculators

use thiserror::Error;

/// Errors raised by the image analyzer and the payout engine.
///
/// Every variant is terminal for the single call that produced it. The core
/// never retries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Empty or degenerate input, e.g. a pixel buffer with no pixels
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The image bytes could not be decoded
    #[error("Image decode error: {0}")]
    ImageDecode(String),

    /// The host could not provide a pixel-processing surface
    #[error("Render context error: {0}")]
    RenderContext(String),

    /// A policy parameter is out of its allowed range
    #[error("Invalid policy parameter `{field}`: {message}")]
    InvalidPolicyParameters { field: String, message: String },
}

impl CoreError {
    pub fn invalid_policy(field: &str, message: impl Into<String>) -> Self {
        CoreError::InvalidPolicyParameters {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Stable machine-readable code for the variant
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::InvalidInput(_) => "INVALID_INPUT",
            CoreError::ImageDecode(_) => "IMAGE_DECODE_ERROR",
            CoreError::RenderContext(_) => "RENDER_CONTEXT_ERROR",
            CoreError::InvalidPolicyParameters { .. } => "INVALID_POLICY_PARAMETERS",
        }
    }
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
