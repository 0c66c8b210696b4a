//! Image intake: file discovery and decoding into pixel arrays.

use std::path::{Path, PathBuf};

use bitmap_engine::PixelArray;
use image::ImageReader;
use tracing::debug;

use crate::error::CollectorError;

/// Lists images with one extension in the top level of a directory.
#[derive(Debug, Clone)]
pub struct ImageIntake {
    source_dir: PathBuf,
    extension: String,
}

impl ImageIntake {
    pub fn new(source_dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            source_dir: source_dir.into(),
            extension: extension.into(),
        }
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Matching files, sorted by file name. Subdirectories are not descended into.
    pub fn discover(&self) -> Result<Vec<PathBuf>, CollectorError> {
        let intake_err = |source: std::io::Error| CollectorError::Intake {
            dir: self.source_dir.clone(),
            source,
        };

        let mut files = Vec::new();
        for entry in std::fs::read_dir(&self.source_dir).map_err(intake_err)? {
            let entry = entry.map_err(intake_err)?;
            let path = entry.path();
            if path.is_file() && has_extension(&path, &self.extension) {
                files.push(path);
            }
        }
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        debug!(
            dir = %self.source_dir.display(),
            count = files.len(),
            "Discovered input files"
        );
        Ok(files)
    }
}

/// Case-insensitive extension check.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

/// The row label for a file: its name with extension, without any directory.
///
/// Names that are not valid UTF-8 are rejected rather than rewritten, so every
/// label matches its file name exactly.
pub fn label_for(path: &Path) -> Result<String, CollectorError> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_owned)
        .ok_or_else(|| CollectorError::Label {
            file: path.to_path_buf(),
        })
}

/// Decode an image file into a normalized 4-channel pixel array.
///
/// The format is detected from the file contents, not its extension.
pub fn decode(path: &Path) -> Result<PixelArray, CollectorError> {
    let decode_err = |source: image::ImageError| CollectorError::Decode {
        file: path.to_path_buf(),
        source,
    };
    let img = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_err(e.into()))?
        .decode()
        .map_err(decode_err)?;
    let rgba = img.to_rgba8();
    debug!(
        file = %path.display(),
        width = rgba.width(),
        height = rgba.height(),
        "Decoded image"
    );
    PixelArray::from_rgba8(&rgba).map_err(|source| CollectorError::Shape {
        file: path.to_path_buf(),
        source,
    })
}
