//! Global-mean binarization.
//!
//! One scalar threshold, the mean of every sample, decides each cell. Values at
//! or below it are foreground (dark ink), values strictly above are background.

use tracing::debug;

use crate::pixel::{BinaryGrid, GrayscaleGrid};
use crate::Result;

/// Arithmetic mean of all samples in the grid.
///
/// Accumulated relative to the first sample, so a uniform grid returns that
/// sample exactly and binarizes as all foreground.
pub fn mean_threshold(grid: &GrayscaleGrid) -> f64 {
    let samples = grid.samples();
    let pivot = samples[0];
    let offset: f64 = samples.iter().map(|v| v - pivot).sum();
    pivot + offset / samples.len() as f64
}

/// Classify each cell against the global mean threshold.
pub fn binarize(grid: &GrayscaleGrid) -> Result<BinaryGrid> {
    let (height, width) = (grid.height(), grid.width());
    let threshold = mean_threshold(grid);
    debug!(height, width, threshold, "Applying mean threshold");

    let cells = grid.samples().iter().map(|&v| v <= threshold).collect();
    BinaryGrid::new(height, width, cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[Vec<f64>]) -> GrayscaleGrid {
        GrayscaleGrid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_threshold_is_global_mean() {
        let g = grid(&[vec![0.0, 0.0], vec![255.0, 255.0]]);
        assert_eq!(mean_threshold(&g), 127.5);
    }

    #[test]
    fn test_dark_rows_are_foreground() {
        let g = grid(&[vec![0.0, 0.0], vec![255.0, 255.0]]);
        let bin = binarize(&g).unwrap();
        assert_eq!(bin.cells(), &[true, true, false, false]);
    }

    #[test]
    fn test_value_equal_to_threshold_is_foreground() {
        // mean = 0.5, the middle cell sits exactly on it
        let g = grid(&[vec![0.0, 0.5, 1.0]]);
        let bin = binarize(&g).unwrap();
        assert_eq!(bin.cells(), &[true, true, false]);
    }

    #[test]
    fn test_uniform_grid_is_all_foreground() {
        for k in [0.0, 0.1, 1.0 / 3.0, 0.7, 1.0] {
            let g = GrayscaleGrid::new(10, 10, vec![k; 100]).unwrap();
            assert_eq!(mean_threshold(&g), k);
            let bin = binarize(&g).unwrap();
            assert_eq!(bin.foreground_count(), 100, "uniform {k} not all foreground");
        }
    }

    #[test]
    fn test_threshold_is_not_per_row() {
        // Row means differ; only the global mean (0.45) matters.
        let g = grid(&[vec![0.1, 0.3], vec![0.6, 0.8]]);
        let bin = binarize(&g).unwrap();
        assert_eq!(bin.cells(), &[true, true, false, false]);
    }

    #[test]
    fn test_binarize_preserves_dimensions() {
        let g = GrayscaleGrid::new(3, 7, (0..21).map(|i| i as f64 / 20.0).collect()).unwrap();
        let bin = binarize(&g).unwrap();
        assert_eq!((bin.height(), bin.width()), (3, 7));
    }
}
