//! Configuration management: defaults, validation, loading from overrides + environment.

pub mod app_config;
pub mod defaults;
pub mod validation;

pub use app_config::CollectorConfig;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CollectorError;

/// A setting as reported by `--list-settings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingInfo {
    pub key: String,
    pub value: String,
    pub default: String,
    pub description: String,
}

/// Describe every setting with its effective value.
pub fn list_settings(
    overrides: &HashMap<&'static str, String>,
) -> Result<Vec<SettingInfo>, CollectorError> {
    let values = app_config::resolve_values(|key| {
        overrides
            .get(key)
            .cloned()
            .or_else(|| std::env::var(key).ok())
    })?;

    Ok(defaults::SETTING_DEFS
        .iter()
        .map(|def| SettingInfo {
            key: def.key.to_string(),
            value: values.get(def.key).cloned().unwrap_or_default(),
            default: def.default.to_string(),
            description: def.description.to_string(),
        })
        .collect())
}
