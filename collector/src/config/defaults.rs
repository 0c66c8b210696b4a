//! All setting definitions with their default values.

use std::collections::HashMap;
use std::sync::LazyLock;

/// (key, default, description)
type DefTuple = (&'static str, &'static str, &'static str);

const DEFS: &[DefTuple] = &[
    ("SOURCE_DIR", "./images", "Directory scanned for input images (top level only)"),
    ("DEST_DIR", ".", "Directory receiving the export file"),
    ("EXPORT_FILE_NAME", "export.csv", "Name of the CSV export file"),
    ("OUTPUT_RESOLUTION", "10", "Edge length N of the N x N output bitmap"),
    ("FILE_EXTENSION", "png", "Extension of input files, matched case-insensitively"),
    ("PREVIEW_ENABLED", "false", "Render preview pages after the run"),
    ("PREVIEW_DIR", "preview", "Preview output directory, relative to DEST_DIR"),
    ("PREVIEW_COLUMNS", "5", "Bitmaps per preview row"),
    ("PREVIEW_ROWS", "6", "Bitmap rows per preview page"),
    ("PREVIEW_SCALE", "8", "Preview pixels per bitmap cell"),
];

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// Setting definitions in display order.
pub static SETTING_DEFS: LazyLock<Vec<SettingDef>> = LazyLock::new(|| {
    DEFS.iter()
        .map(|&(key, default, description)| SettingDef {
            key,
            default,
            description,
        })
        .collect()
});

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, &'static SettingDef>> =
    LazyLock::new(|| SETTING_DEFS.iter().map(|d| (d.key, d)).collect());

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validation::validate_setting;

    #[test]
    fn test_every_default_is_valid() {
        for def in SETTING_DEFS.iter() {
            assert!(
                validate_setting(def.key, def.default).is_ok(),
                "default for {} is invalid",
                def.key
            );
        }
    }

    #[test]
    fn test_get_default() {
        assert_eq!(get_default("OUTPUT_RESOLUTION"), Some("10"));
        assert_eq!(get_default("UNKNOWN"), None);
    }
}
