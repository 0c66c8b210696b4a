//! Batch loop: discover → decode → reduce → export, one file at a time.

use std::path::{Path, PathBuf};

use bitmap_csv::{with_exporter, BitmapCsvExporter};
use bitmap_engine::{BitmapProcessor, BitmapRecord};
use tracing::{error, info, warn};

use crate::config::CollectorConfig;
use crate::error::CollectorError;
use crate::intake::{self, ImageIntake};
use crate::preview;

/// A file that was skipped, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedFile {
    pub file: PathBuf,
    pub reason: String,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub processed: usize,
    pub failed: Vec<FailedFile>,
    pub export_path: PathBuf,
    pub preview_pages: Vec<PathBuf>,
}

/// Runs one batch according to a [`CollectorConfig`].
#[derive(Debug, Clone)]
pub struct BitmapCollector {
    config: CollectorConfig,
}

impl BitmapCollector {
    pub fn new(config: CollectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    /// Process every matching file in the source directory.
    ///
    /// Decode and shape failures skip the file. An export failure halts the run
    /// after the export file has been closed.
    pub fn run(&self) -> Result<RunSummary, CollectorError> {
        let intake = ImageIntake::new(&self.config.source_dir, &self.config.file_extension);
        let files = intake.discover()?;
        if files.is_empty() {
            warn!(
                dir = %intake.source_dir().display(),
                extension = %self.config.file_extension,
                "No input files found"
            );
        }

        let processor = BitmapProcessor::new(self.config.resolution()?);
        let export_path = self.config.export_path();
        info!(
            files = files.len(),
            resolution = %processor.target(),
            output = %export_path.display(),
            "Processing"
        );

        let mut summary = RunSummary {
            export_path: export_path.clone(),
            ..RunSummary::default()
        };
        let mut records = Vec::new();

        with_exporter(&export_path, |exporter| {
            for (index, path) in files.iter().enumerate() {
                match self.export_file(&processor, exporter, path) {
                    Ok(record) => {
                        summary.processed += 1;
                        info!(
                            file = %record.label,
                            done = index + 1,
                            total = files.len(),
                            "Processed"
                        );
                        if self.config.preview_enabled {
                            records.push(record);
                        }
                    }
                    Err(e) if e.is_per_file() => {
                        warn!(file = %path.display(), "Skipping file: {e}");
                        summary.failed.push(FailedFile {
                            file: path.clone(),
                            reason: e.to_string(),
                        });
                    }
                    Err(e) => {
                        error!(file = %path.display(), "Halting run: {e}");
                        return Err(e);
                    }
                }
            }
            Ok(())
        })?;

        if self.config.preview_enabled {
            summary.preview_pages = self.write_preview(records);
        }

        info!(
            processed = summary.processed,
            failed = summary.failed.len(),
            output = %summary.export_path.display(),
            "done."
        );
        Ok(summary)
    }

    /// Reduce one file and append its row.
    fn export_file(
        &self,
        processor: &BitmapProcessor,
        exporter: &mut BitmapCsvExporter,
        path: &Path,
    ) -> Result<BitmapRecord, CollectorError> {
        let label = intake::label_for(path)?;
        let pixels = intake::decode(path)?;
        let grid = processor
            .process(&pixels)
            .map_err(|source| CollectorError::Shape {
                file: path.to_path_buf(),
                source,
            })?;
        exporter.append(&label, &grid)?;
        Ok(BitmapRecord::new(label, grid))
    }

    /// Render preview pages. Failures are logged and never affect the export.
    fn write_preview(&self, mut records: Vec<BitmapRecord>) -> Vec<PathBuf> {
        records.sort_by(|a, b| a.label.cmp(&b.label));
        let dir = self.config.preview_path();
        match preview::write_pages(&records, &self.config.preview_layout(), &dir) {
            Ok(pages) => pages,
            Err(e) => {
                warn!(dir = %dir.display(), "Failed to write preview pages: {e}");
                Vec::new()
            }
        }
    }
}
