//! Batch collector: turns a directory of images into one CSV of labelled bitmaps.

pub mod collector;
pub mod config;
pub mod error;
pub mod intake;
pub mod preview;

#[cfg(test)]
mod tests;

pub use collector::{BitmapCollector, FailedFile, RunSummary};
pub use config::CollectorConfig;
pub use error::CollectorError;

/// Load .env from multiple candidate paths.
pub fn load_dotenv() {
    let candidates = [".env", "../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::debug!("No .env file found, using system environment variables");
}
