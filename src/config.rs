//! Compressor configuration module.
//!
//! Default compression settings come in three layers, each overriding the
//! one before it:
//!
//! ```text
//! stock defaults            quality 85, 1920x1080
//! image-compressor.toml     optional, in the working directory or --config
//! command-line flags        --quality, --max-width, --max-height
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [defaults]
//! quality = 85          # JPEG quality (1-100)
//! max_width = 1920      # Maximum output width in pixels
//! max_height = 1080     # Maximum output height in pixels
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::CompressSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "image-compressor.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `image-compressor.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompressorConfig {
    /// Settings used when a flag is not given on the command line.
    pub defaults: CompressSettings,
}

impl CompressorConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = &self.defaults;
        if !(1..=100).contains(&d.quality) {
            return Err(ConfigError::Validation(
                "defaults.quality must be 1-100".into(),
            ));
        }
        if d.max_width == 0 || d.max_height == 0 {
            return Err(ConfigError::Validation(
                "defaults.max_width and defaults.max_height must be positive".into(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(CompressorConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Build an overlay from command-line flags. Only flags actually given appear.
pub fn flag_overrides(
    quality: Option<u32>,
    max_width: Option<u32>,
    max_height: Option<u32>,
) -> Option<toml::Value> {
    let mut defaults = toml::Table::new();
    for (key, value) in [
        ("quality", quality),
        ("max_width", max_width),
        ("max_height", max_height),
    ] {
        if let Some(v) = value {
            defaults.insert(key.to_string(), toml::Value::Integer(i64::from(v)));
        }
    }
    if defaults.is_empty() {
        return None;
    }
    let mut root = toml::Table::new();
    root.insert("defaults".to_string(), toml::Value::Table(defaults));
    Some(toml::Value::Table(root))
}

/// Merge overlays in order onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlays: impl IntoIterator<Item = toml::Value>,
) -> Result<CompressorConfig, ConfigError> {
    let merged = overlays.into_iter().fold(base, merge_toml);
    let config: CompressorConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from the file at `path` on top of stock defaults, then apply
/// command-line `flags` (see [`flag_overrides`]).
///
/// A missing file is fine unless `required` is set (an explicit `--config`).
pub fn load_config(
    path: &Path,
    required: bool,
    flags: Option<toml::Value>,
) -> Result<CompressorConfig, ConfigError> {
    let file = load_raw_config(path)?;
    if file.is_none() && required {
        return Err(ConfigError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("config file not found: {}", path.display()),
        )));
    }
    resolve_config(stock_defaults_value()?, file.into_iter().chain(flags))
}

/// Returns a fully-commented stock config file with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Image Compressor Configuration
# =============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# The file is read from ./image-compressor.toml, or from the path given
# with --config. Command-line flags override anything set here.
# Unknown keys will cause an error.

[defaults]
# JPEG encoding quality (1 = smallest file, 100 = best quality).
# Ignored when the output extension selects a lossless format (png, bmp, tiff, webp).
quality = 85

# Bounding box for the output, in pixels. Images are scaled down uniformly
# to fit inside it; smaller images are never enlarged.
max_width = 1920
max_height = 1080
"##
}
