//! Configuration errors, reported before any ray is traced.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("sphere radius must be finite and non-zero, got {0}")]
    InvalidRadius(f64),

    #[error("aspect ratio must be finite and positive, got {0}")]
    InvalidAspectRatio(f64),

    #[error("vertical field of view must be between 0 and 180 degrees, got {0}")]
    InvalidFieldOfView(f64),

    #[error("focus distance must be finite and positive, got {0}")]
    InvalidFocusDistance(f64),

    #[error("aperture must be finite and non-negative, got {0}")]
    InvalidAperture(f64),

    #[error("camera basis is degenerate: {0}")]
    DegenerateView(&'static str),

    #[error("image dimensions must be non-zero, got {width}x{height}")]
    InvalidImageSize { width: u32, height: u32 },

    #[error("samples per pixel must be non-zero")]
    InvalidSampleCount,

    #[error("metal fuzz must be within [0, 1], got {0}")]
    InvalidFuzz(f64),

    #[error("refractive index must be finite and positive, got {0}")]
    InvalidRefractiveIndex(f64),
}
