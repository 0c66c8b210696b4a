//! Lazily opened CSV exporter.
//!
//! The file is created (truncating any previous export) on the first append and
//! stays open until [`BitmapCsvExporter::close`]. [`with_exporter`] scopes an
//! exporter to a closure and closes it on every exit path.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use bitmap_engine::BinaryGrid;
use tracing::{debug, info};

use crate::row::{encode_row, LINE_TERMINATOR};
use crate::{ExportError, Result};

/// Appends one row per bitmap to a CSV file.
#[derive(Debug)]
pub struct BitmapCsvExporter {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    row_cells: Option<usize>,
    rows_written: usize,
}

impl BitmapCsvExporter {
    /// Create an exporter for `path`. Nothing is opened until the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: None,
            row_cells: None,
            rows_written: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn is_open(&self) -> bool {
        self.writer.is_some()
    }

    /// Append a row for `grid` labelled `label`.
    ///
    /// Every row in one export must carry the same number of cells.
    pub fn append(&mut self, label: &str, grid: &BinaryGrid) -> Result<()> {
        let cells = grid.cells().len();
        if let Some(expected) = self.row_cells {
            if expected != cells {
                return Err(ExportError::RowWidth {
                    expected,
                    actual: cells,
                });
            }
        }

        let mut line = encode_row(label, grid);
        line.push_str(LINE_TERMINATOR);

        let mut writer = match self.writer.take() {
            Some(w) => w,
            None => self.open()?,
        };
        let written = writer.write_all(line.as_bytes());
        self.writer = Some(writer);
        written.map_err(|source| ExportError::Write {
            path: self.path.clone(),
            source,
        })?;

        self.row_cells = Some(cells);
        self.rows_written += 1;
        debug!(label, rows = self.rows_written, "Appended bitmap row");
        Ok(())
    }

    fn open(&self) -> Result<BufWriter<File>> {
        let file = File::create(&self.path).map_err(|source| ExportError::Open {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), "Opened export file");
        Ok(BufWriter::new(file))
    }

    /// Flush and close the file. Closing an exporter that never opened is a no-op.
    pub fn close(&mut self) -> Result<()> {
        let Some(mut writer) = self.writer.take() else {
            return Ok(());
        };
        let write_err = |source: std::io::Error| ExportError::Write {
            path: self.path.clone(),
            source,
        };
        writer.flush().map_err(write_err)?;
        let file = writer.into_inner().map_err(|e| write_err(e.into_error()))?;
        file.sync_all().map_err(write_err)?;
        debug!(path = %self.path.display(), rows = self.rows_written, "Closed export file");
        Ok(())
    }
}

/// Run `f` with an exporter for `path`, closing it afterwards whether `f` succeeds or not.
///
/// An error from `f` takes precedence over a close error.
pub fn with_exporter<T, E>(
    path: impl Into<PathBuf>,
    f: impl FnOnce(&mut BitmapCsvExporter) -> std::result::Result<T, E>,
) -> std::result::Result<T, E>
where
    E: From<ExportError>,
{
    let mut exporter = BitmapCsvExporter::new(path);
    let result = f(&mut exporter);
    let closed = exporter.close();
    let value = result?;
    closed?;
    Ok(value)
}
