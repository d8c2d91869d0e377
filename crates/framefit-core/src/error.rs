//! Error types for the transformation engine.

use thiserror::Error;

/// Errors surfaced by the transformation pipeline.
///
/// All variants are caller contract violations: the pipeline fails fast
/// rather than producing distorted or silently wrong pixels. Watermark
/// loading failures are deliberately *not* represented here; they are
/// recovered inside the pipeline (see `transform::watermark`).
#[derive(Debug, Error)]
pub enum TransformError {
    /// Target dimensions are zero where a positive size is required.
    #[error("Invalid target dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The scale factor is zero, negative, or not finite.
    #[error("Invalid scale factor {0}")]
    InvalidScale(f32),

    /// The source image has no pixels.
    #[error("Source image is empty")]
    EmptySource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TransformError::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert_eq!(err.to_string(), "Invalid target dimensions 0x100");

        let err = TransformError::InvalidScale(-1.0);
        assert_eq!(err.to_string(), "Invalid scale factor -1");
    }
}
