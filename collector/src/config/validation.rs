//! Setting value validation.

use regex::Regex;
use std::sync::LazyLock;

static RE_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{1,10}$").unwrap());

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "SOURCE_DIR" | "DEST_DIR" | "PREVIEW_DIR" => {
            if value.trim().is_empty() {
                return Err("must not be empty".into());
            }
        }
        "EXPORT_FILE_NAME" => {
            if value.trim().is_empty() {
                return Err("must not be empty".into());
            }
            if value.contains(['/', '\\']) {
                return Err("must be a file name without path separators".into());
            }
        }
        "OUTPUT_RESOLUTION" => validate_int_range(value, 1, 256)?,
        "FILE_EXTENSION" => {
            if !RE_EXTENSION.is_match(value) {
                return Err("must be 1-10 alphanumeric characters without a dot".into());
            }
        }
        "PREVIEW_COLUMNS" | "PREVIEW_ROWS" => validate_int_range(value, 1, 20)?,
        "PREVIEW_SCALE" => validate_int_range(value, 1, 64)?,
        "PREVIEW_ENABLED" => {
            if value != "true" && value != "false" {
                return Err("must be 'true' or 'false'".into());
            }
        }
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: u32, max: u32) -> Result<(), String> {
    let v: u32 = value.parse().map_err(|_| "must be an integer")?;
    if v < min || v > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}
