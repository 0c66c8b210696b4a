//! Alpha-aware grayscale reduction.
//!
//! Fully transparent pixels become white rather than black: the binarizer treats
//! dark values as ink, so transparent canvas must read as background.

use tracing::debug;

use crate::pixel::{GrayscaleGrid, PixelArray};
use crate::{EngineError, Result, MAX_INTENSITY};

/// Collapse a 4-channel RGBA array into one intensity per cell.
///
/// `alpha == 0` yields [`MAX_INTENSITY`]; any other alpha yields the unweighted
/// mean of red, green and blue.
pub fn to_grayscale(image: &PixelArray) -> Result<GrayscaleGrid> {
    if image.channels() != 4 {
        return Err(EngineError::ShapeMismatch {
            stage: "grayscale",
            expected: "4 channels (RGBA)".into(),
            actual: format!("{} channels", image.channels()),
        });
    }

    let (height, width) = (image.height(), image.width());
    debug!(height, width, "Reducing RGBA to grayscale");

    let data = image
        .samples()
        .chunks_exact(4)
        .map(|px| {
            if px[3] == 0.0 {
                MAX_INTENSITY
            } else {
                (px[0] + px[1] + px[2]) / 3.0
            }
        })
        .collect();

    GrayscaleGrid::new(height, width, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(pixels: &[[f64; 4]], width: usize) -> PixelArray {
        let data = pixels.iter().flat_map(|p| p.iter().copied()).collect();
        PixelArray::new(pixels.len() / width, width, 4, data).unwrap()
    }

    #[test]
    fn test_transparent_pixels_become_white() {
        let img = rgba(&[[0.0, 0.0, 0.0, 0.0], [0.2, 0.9, 0.4, 0.0]], 2);
        let gray = to_grayscale(&img).unwrap();
        assert_eq!(gray.get(0, 0), MAX_INTENSITY);
        assert_eq!(gray.get(0, 1), MAX_INTENSITY);
    }

    #[test]
    fn test_opaque_pixels_use_unweighted_mean() {
        let img = rgba(&[[0.3, 0.6, 0.9, 1.0], [1.0, 0.0, 0.0, 0.01]], 1);
        let gray = to_grayscale(&img).unwrap();
        assert!((gray.get(0, 0) - 0.6).abs() < 1e-12);
        // Partially transparent still averages colour, alpha is ignored.
        assert!((gray.get(1, 0) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_preserves_dimensions() {
        let img = PixelArray::filled(3, 5, 4, 0.5).unwrap();
        let gray = to_grayscale(&img).unwrap();
        assert_eq!((gray.height(), gray.width()), (3, 5));
    }

    #[test]
    fn test_rejects_non_rgba_input() {
        for channels in [1, 3] {
            let img = PixelArray::filled(2, 2, channels, 0.5).unwrap();
            let err = to_grayscale(&img).unwrap_err();
            assert!(matches!(err, EngineError::ShapeMismatch { stage: "grayscale", .. }));
        }
    }
}
