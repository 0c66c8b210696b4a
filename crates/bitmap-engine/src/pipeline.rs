//! Fixed resample → grayscale → binarize chain.

use tracing::debug;

use crate::pixel::{BinaryGrid, PixelArray, Resolution};
use crate::{binarize, resample, to_grayscale, EngineError, Result};

/// Reduces decoded images to bitmaps at one configured resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapProcessor {
    target: Resolution,
}

impl BitmapProcessor {
    pub fn new(target: Resolution) -> Self {
        Self { target }
    }

    pub fn target(&self) -> Resolution {
        self.target
    }

    /// Run the full chain. Colour channels are interpolated before grayscale reduction.
    pub fn process(&self, image: &PixelArray) -> Result<BinaryGrid> {
        if image.channels() != 4 {
            return Err(EngineError::ShapeMismatch {
                stage: "pipeline input",
                expected: "4 channels (RGBA)".into(),
                actual: image.shape(),
            });
        }

        let resized = resample(image, self.target);
        if (resized.height(), resized.width()) != (self.target.height, self.target.width) {
            return Err(EngineError::ShapeMismatch {
                stage: "resample",
                expected: self.target.to_string(),
                actual: resized.shape(),
            });
        }

        let gray = to_grayscale(&resized)?;
        let bitmap = binarize(&gray)?;
        debug!(
            target = %self.target,
            foreground = bitmap.foreground_count(),
            "Bitmap reduced"
        );
        Ok(bitmap)
    }
}
