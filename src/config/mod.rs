pub mod types;

use crate::error::{ConfigError, Result};
use std::fs;
use std::path::Path;

pub use types::{Settings, SettingsOverlay};

/// Load settings from an optional TOML file, merged over the defaults.
///
/// With no file the defaults are returned as-is, so callers downstream can
/// always rely on a fully populated record.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };

    if !path.is_file() {
        return Err(ConfigError::NotFound(path.to_path_buf()).into());
    }

    let raw = fs::read_to_string(path)?;
    let overlay: SettingsOverlay =
        toml::from_str(&raw).map_err(|e| ConfigError::ParsingFailed(e.to_string()))?;

    let settings = overlay.apply(Settings::default());
    log::debug!("Loaded settings from {}", path.display());
    Ok(settings)
}
