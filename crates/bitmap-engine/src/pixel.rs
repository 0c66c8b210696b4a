//! Grid types flowing through the pipeline.
//!
//! Samples are stored as `f64` normalized to `[0, 1]`. 8-bit input is converted
//! once at ingestion ([`PixelArray::from_rgba8`]); nothing converts back mid-pipeline.

use image::RgbaImage;

use crate::{EngineError, Result};

/// Target size of the resampled grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub height: usize,
    pub width: usize,
}

impl Resolution {
    /// Create a resolution, rejecting zero-sized edges.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(EngineError::InvalidDimensions(format!(
                "target resolution must be positive, got {height}x{width}"
            )));
        }
        Ok(Self { height, width })
    }

    /// An N×N resolution.
    pub fn square(n: usize) -> Result<Self> {
        Self::new(n, n)
    }

    /// Number of cells in a grid of this resolution.
    pub fn cells(&self) -> usize {
        self.height * self.width
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            height: crate::DEFAULT_RESOLUTION,
            width: crate::DEFAULT_RESOLUTION,
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

/// A decoded image: `height × width` cells of `channels` samples each, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelArray {
    height: usize,
    width: usize,
    channels: usize,
    data: Vec<f64>,
}

impl PixelArray {
    /// Build an array from row-major interleaved samples.
    pub fn new(height: usize, width: usize, channels: usize, data: Vec<f64>) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(EngineError::InvalidDimensions(format!(
                "pixel array must be non-empty, got {height}x{width}"
            )));
        }
        if !matches!(channels, 1 | 3 | 4) {
            return Err(EngineError::InvalidDimensions(format!(
                "unsupported channel count {channels}"
            )));
        }
        let expected = height * width * channels;
        if data.len() != expected {
            return Err(EngineError::ShapeMismatch {
                stage: "pixel array",
                expected: format!("{expected} samples"),
                actual: format!("{} samples", data.len()),
            });
        }
        if let Some(&bad) = data.iter().find(|v| !(0.0..=1.0).contains(*v)) {
            return Err(EngineError::SampleOutOfRange(bad));
        }
        Ok(Self {
            height,
            width,
            channels,
            data,
        })
    }

    /// Assemble an array from samples a pipeline stage already shaped.
    pub(crate) fn from_raw(height: usize, width: usize, channels: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), height * width * channels);
        Self {
            height,
            width,
            channels,
            data,
        }
    }

    /// Array of the given shape with every sample set to `value`.
    pub fn filled(height: usize, width: usize, channels: usize, value: f64) -> Result<Self> {
        Self::new(height, width, channels, vec![value; height * width * channels])
    }

    /// Ingest a decoded 8-bit RGBA image, normalizing samples to `[0, 1]`.
    pub fn from_rgba8(img: &RgbaImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        let data = img
            .as_raw()
            .iter()
            .map(|&v| f64::from(v) / 255.0)
            .collect();
        Self::new(height as usize, width as usize, 4, data)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Sample of channel `c` at row `y`, column `x`.
    #[inline]
    pub fn get(&self, y: usize, x: usize, c: usize) -> f64 {
        self.data[(y * self.width + x) * self.channels + c]
    }

    /// All channel samples of one cell.
    #[inline]
    pub fn pixel(&self, y: usize, x: usize) -> &[f64] {
        let start = (y * self.width + x) * self.channels;
        &self.data[start..start + self.channels]
    }

    /// Raw row-major interleaved samples.
    pub fn samples(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn shape(&self) -> String {
        format!("{}x{}x{}", self.height, self.width, self.channels)
    }
}

/// Single-channel intensity grid produced by grayscale reduction.
#[derive(Debug, Clone, PartialEq)]
pub struct GrayscaleGrid {
    height: usize,
    width: usize,
    data: Vec<f64>,
}

impl GrayscaleGrid {
    pub fn new(height: usize, width: usize, data: Vec<f64>) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(EngineError::InvalidDimensions(format!(
                "grayscale grid must be non-empty, got {height}x{width}"
            )));
        }
        if data.len() != height * width {
            return Err(EngineError::ShapeMismatch {
                stage: "grayscale grid",
                expected: format!("{} samples", height * width),
                actual: format!("{} samples", data.len()),
            });
        }
        if let Some(&bad) = data.iter().find(|v| !v.is_finite()) {
            return Err(EngineError::NonFiniteSample(bad));
        }
        Ok(Self {
            height,
            width,
            data,
        })
    }

    /// Build a grid from nested rows; all rows must share one length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|r| r.len() != width) {
            return Err(EngineError::ShapeMismatch {
                stage: "grayscale grid",
                expected: format!("rows of {width} samples"),
                actual: format!("a row of {} samples", bad.len()),
            });
        }
        Self::new(height, width, rows.concat())
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn get(&self, y: usize, x: usize) -> f64 {
        self.data[y * self.width + x]
    }

    /// Row-major samples.
    pub fn samples(&self) -> &[f64] {
        &self.data
    }
}

/// Foreground/background grid. `true` marks foreground (ink).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryGrid {
    height: usize,
    width: usize,
    cells: Vec<bool>,
}

impl BinaryGrid {
    pub fn new(height: usize, width: usize, cells: Vec<bool>) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(EngineError::InvalidDimensions(format!(
                "binary grid must be non-empty, got {height}x{width}"
            )));
        }
        if cells.len() != height * width {
            return Err(EngineError::ShapeMismatch {
                stage: "binary grid",
                expected: format!("{} cells", height * width),
                actual: format!("{} cells", cells.len()),
            });
        }
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn is_foreground(&self, y: usize, x: usize) -> bool {
        self.cells[y * self.width + x]
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width)
    }

    pub fn foreground_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

/// A binarized image labelled with the file name it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapRecord {
    pub label: String,
    pub grid: BinaryGrid,
}

impl BitmapRecord {
    pub fn new(label: impl Into<String>, grid: BinaryGrid) -> Self {
        Self {
            label: label.into(),
            grid,
        }
    }
}
