//! Image-to-bitmap reduction pipeline.
//!
//! Reduces an arbitrary-size RGBA image to a small N×N monochrome bitmap:
//! reflect-boundary resampling, alpha-aware grayscale reduction and a
//! global-mean binarization, in that order.

pub mod grayscale;
pub mod pixel;
pub mod pipeline;
pub mod preview;
pub mod resize;
pub mod threshold;

// Re-exports for convenience
pub use grayscale::to_grayscale;
pub use pipeline::BitmapProcessor;
pub use pixel::{BinaryGrid, BitmapRecord, GrayscaleGrid, PixelArray, Resolution};
pub use preview::{render_bitmap, render_pages, PreviewLayout};
pub use resize::resample;
pub use threshold::{binarize, mean_threshold};

/// Default edge length of the output bitmap.
pub const DEFAULT_RESOLUTION: usize = 10;

/// Intensity assigned to white, in the normalized sample range.
pub const MAX_INTENSITY: f64 = 1.0;

/// Errors raised when a pipeline stage receives input that violates its preconditions.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Shape mismatch in {stage}: expected {expected}, got {actual}")]
    ShapeMismatch {
        stage: &'static str,
        expected: String,
        actual: String,
    },

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Sample {0} outside the normalized range [0, 1]")]
    SampleOutOfRange(f64),

    #[error("Sample {0} is not a finite intensity")]
    NonFiniteSample(f64),
}

/// Result type alias for bitmap-engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
