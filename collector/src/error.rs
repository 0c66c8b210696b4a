//! Batch error taxonomy.

use std::path::PathBuf;

use bitmap_csv::ExportError;
use bitmap_engine::EngineError;

/// Errors raised by a collector run.
#[derive(Debug, thiserror::Error)]
pub enum CollectorError {
    #[error("Failed to decode {}: {source}", file.display())]
    Decode {
        file: PathBuf,
        source: image::ImageError,
    },

    #[error("File name of {} is not valid UTF-8", file.display())]
    Label { file: PathBuf },

    #[error("Shape mismatch in {}: {source}", file.display())]
    Shape { file: PathBuf, source: EngineError },

    #[error("Export failed: {0}")]
    Resource(#[from] ExportError),

    #[error("Failed to read source directory {}: {source}", dir.display())]
    Intake {
        dir: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl CollectorError {
    /// Whether the run should record this failure and continue with the next file.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            Self::Decode { .. } | Self::Label { .. } | Self::Shape { .. }
        )
    }
}
