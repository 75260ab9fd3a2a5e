use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::media::DEFAULT_DELIMITERS;

/// Global configuration loaded from `~/.config/dwcm/config.toml`.
///
/// The built-in delimiter list, MIME alias table, and HTML-classified set
/// cover common data; deployments hitting publisher-specific quirks extend
/// them here instead of patching the tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DwcmConfig {
    /// Extra multi-value delimiters, tried after the built-in ones (lower
    /// priority).
    #[serde(default)]
    pub extra_delimiters: Vec<String>,
    /// Extra MIME aliases: alias -> canonical name.
    #[serde(default)]
    pub extra_mime_aliases: HashMap<String, String>,
    /// Extra MIME types to treat as HTML links rather than media files.
    #[serde(default)]
    pub extra_html_types: Vec<String>,
}

impl DwcmConfig {
    /// Full delimiter list in priority order: built-ins first, then extras.
    pub fn delimiters(&self) -> Vec<String> {
        DEFAULT_DELIMITERS
            .iter()
            .map(|d| d.to_string())
            .chain(self.extra_delimiters.iter().cloned())
            .collect()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dwcm")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DwcmConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DwcmConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

pub fn load_from_path(path: &Path) -> Result<DwcmConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: DwcmConfig = toml::from_str(&data)?;
    Ok(cfg)
}
