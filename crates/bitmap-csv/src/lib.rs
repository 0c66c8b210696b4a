//! CSV export of labelled bitmaps.
//!
//! One row per image: the file name, then every cell in row-major order as
//! `1` (foreground) or `0` (background). No header row.

pub mod exporter;
pub mod row;

// Re-exports for convenience
pub use exporter::{with_exporter, BitmapCsvExporter};
pub use row::{encode_row, BACKGROUND, DELIMITER, FOREGROUND, LINE_TERMINATOR};

use std::path::PathBuf;

/// Errors that can occur while writing the export file.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to open export file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write export file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Row width mismatch: expected {expected} cells, got {actual}")]
    RowWidth { expected: usize, actual: usize },
}

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
