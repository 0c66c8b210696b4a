//! Command-line entry point.
//!
//! Reduces every matching image in the source directory to an N×N bitmap and
//! writes one CSV row per image.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bitmap_collector::config::{self, CollectorConfig};
use bitmap_collector::BitmapCollector;

/// Convert images into fixed-resolution monochrome bitmaps exported as CSV rows.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing the input images.
    source_dir: Option<PathBuf>,

    /// Directory receiving the export file.
    #[arg(short, long)]
    dest_dir: Option<PathBuf>,

    /// Name of the export file.
    #[arg(short, long)]
    output: Option<String>,

    /// Edge length of the output bitmap.
    #[arg(short, long)]
    resolution: Option<u32>,

    /// Input file extension, matched case-insensitively.
    #[arg(short, long)]
    extension: Option<String>,

    /// Render preview pages after the run.
    #[arg(short, long)]
    preview: bool,

    /// Print every setting with its effective value as JSON and exit.
    #[arg(long)]
    list_settings: bool,
}

impl Args {
    /// Command-line values keyed by setting name.
    fn overrides(&self) -> HashMap<&'static str, String> {
        let mut map = HashMap::new();
        if let Some(dir) = &self.source_dir {
            map.insert("SOURCE_DIR", dir.display().to_string());
        }
        if let Some(dir) = &self.dest_dir {
            map.insert("DEST_DIR", dir.display().to_string());
        }
        if let Some(name) = &self.output {
            map.insert("EXPORT_FILE_NAME", name.clone());
        }
        if let Some(n) = self.resolution {
            map.insert("OUTPUT_RESOLUTION", n.to_string());
        }
        if let Some(ext) = &self.extension {
            map.insert("FILE_EXTENSION", ext.clone());
        }
        if self.preview {
            map.insert("PREVIEW_ENABLED", "true".to_string());
        }
        map
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    bitmap_collector::load_dotenv();
    let overrides = args.overrides();

    if args.list_settings {
        let settings = config::list_settings(&overrides)?;
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    let config = CollectorConfig::load(&overrides)?;
    let summary = BitmapCollector::new(config).run()?;

    if !summary.failed.is_empty() {
        tracing::warn!(
            skipped = summary.failed.len(),
            "Some files could not be processed"
        );
    }
    Ok(())
}
