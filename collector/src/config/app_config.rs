//! Runtime configuration resolved from overrides, environment and defaults.

use std::collections::HashMap;
use std::path::PathBuf;

use bitmap_engine::{PreviewLayout, Resolution};

use super::defaults::{get_default, SETTING_DEFS};
use super::validation::validate_setting;
use crate::error::CollectorError;

/// Typed batch configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectorConfig {
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub export_file_name: String,
    pub output_resolution: usize,
    pub file_extension: String,
    pub preview_enabled: bool,
    pub preview_dir: PathBuf,
    pub preview_columns: u32,
    pub preview_rows: u32,
    pub preview_scale: u32,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("./images"),
            dest_dir: PathBuf::from("."),
            export_file_name: "export.csv".into(),
            output_resolution: bitmap_engine::DEFAULT_RESOLUTION,
            file_extension: "png".into(),
            preview_enabled: false,
            preview_dir: PathBuf::from("preview"),
            preview_columns: 5,
            preview_rows: 6,
            preview_scale: 8,
        }
    }
}

impl CollectorConfig {
    /// Load from `overrides` first, then the process environment, then defaults.
    pub fn load(overrides: &HashMap<&'static str, String>) -> Result<Self, CollectorError> {
        Self::load_with(|key| {
            overrides
                .get(key)
                .cloned()
                .or_else(|| std::env::var(key).ok())
        })
    }

    /// Load using `lookup` for explicit values. Every value is validated.
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CollectorError> {
        let values = resolve_values(lookup)?;
        let g = |key: &'static str| value_of(&values, key);

        Ok(Self {
            source_dir: PathBuf::from(g("SOURCE_DIR")),
            dest_dir: PathBuf::from(g("DEST_DIR")),
            export_file_name: g("EXPORT_FILE_NAME").to_string(),
            output_resolution: parse_number(g("OUTPUT_RESOLUTION"), "OUTPUT_RESOLUTION")?,
            file_extension: g("FILE_EXTENSION").to_ascii_lowercase(),
            preview_enabled: g("PREVIEW_ENABLED") == "true",
            preview_dir: PathBuf::from(g("PREVIEW_DIR")),
            preview_columns: parse_number(g("PREVIEW_COLUMNS"), "PREVIEW_COLUMNS")?,
            preview_rows: parse_number(g("PREVIEW_ROWS"), "PREVIEW_ROWS")?,
            preview_scale: parse_number(g("PREVIEW_SCALE"), "PREVIEW_SCALE")?,
        })
    }

    /// Full path of the export file.
    pub fn export_path(&self) -> PathBuf {
        self.dest_dir.join(&self.export_file_name)
    }

    /// Directory receiving preview pages.
    pub fn preview_path(&self) -> PathBuf {
        self.dest_dir.join(&self.preview_dir)
    }

    pub fn resolution(&self) -> Result<Resolution, CollectorError> {
        Resolution::square(self.output_resolution)
            .map_err(|e| CollectorError::Config(format!("OUTPUT_RESOLUTION: {e}")))
    }

    pub fn preview_layout(&self) -> PreviewLayout {
        PreviewLayout {
            columns: self.preview_columns,
            rows: self.preview_rows,
            scale: self.preview_scale,
            ..PreviewLayout::default()
        }
    }
}

/// Effective value of every known setting, keyed by setting name.
pub fn resolve_values(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<HashMap<&'static str, String>, CollectorError> {
    SETTING_DEFS
        .iter()
        .map(|def| {
            let value = lookup(def.key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| get_default(def.key).unwrap_or_default().to_string());
            validate_setting(def.key, &value)
                .map_err(|msg| CollectorError::Config(format!("{}={value:?}: {msg}", def.key)))?;
            Ok((def.key, value))
        })
        .collect()
}

fn value_of<'a>(values: &'a HashMap<&'static str, String>, key: &str) -> &'a str {
    values.get(key).map(String::as_str).unwrap_or_default()
}

fn parse_number<T: std::str::FromStr>(value: &str, key: &str) -> Result<T, CollectorError> {
    value
        .parse()
        .map_err(|_| CollectorError::Config(format!("{key}={value:?}: must be an integer")))
}
