//! Error types for crop operations.

use thiserror::Error;

/// Result type for crop operations.
pub type CropResult<T> = Result<T, CropError>;

/// Errors that can occur in crop operations.
#[derive(Debug, Error)]
pub enum CropError {
    /// Aspect ratio must be a positive finite number.
    #[error("Invalid aspect ratio: {0}")]
    InvalidAspectRatio(f32),

    /// The surface failed to draw the overlay.
    #[error("Rendering error: {0}")]
    Render(String),
}
