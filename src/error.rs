//! Lighting error types

use thiserror::Error;

/// Errors raised outside the per-fragment evaluator, which itself never fails
#[derive(Error, Debug)]
pub enum LightingError {
    #[error("Invalid lighting configuration: {0}")]
    InvalidConfig(String),
    #[error("Fixed binding capacity of {capacity} elements exceeded")]
    CapacityExceeded { capacity: usize },
    #[error("No Camera2d found in the world")]
    NoCamera,
    #[error("Invalid viewport size {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
    #[error("Color buffer expected {expected} pixels, got {actual}")]
    BufferSize { expected: usize, actual: usize },
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type LightingResult<T> = Result<T, LightingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LightingError::CapacityExceeded { capacity: 82 };
        assert_eq!(
            err.to_string(),
            "Fixed binding capacity of 82 elements exceeded"
        );

        let err = LightingError::BufferSize {
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Color buffer expected 4 pixels, got 3");
    }
}
