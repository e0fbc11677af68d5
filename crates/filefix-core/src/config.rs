use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::archive::{ArchiveCompression, DEFAULT_ARCHIVE_NAME};
use crate::batch::DEFAULT_MAX_FILES;
use crate::casing::CasingStyle;
use crate::entitlement::EntitlementConfig;
use crate::usage::QuotaConfig;

/// Global configuration loaded from `~/.config/filefix/config.toml`.
///
/// Every field has a default, so a partial file is fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilefixConfig {
    /// Casing style used when the CLI is not given `--style`.
    pub default_style: CasingStyle,
    /// File name for archives written without `--output`.
    pub archive_name: String,
    /// Entry compression: "deflated" (default) or "stored".
    pub compression: ArchiveCompression,
    /// Maximum number of files in one batch.
    pub max_files_per_batch: usize,
    /// Free-tier daily quota.
    pub quota: QuotaConfig,
    /// Owner and pro email lists.
    pub entitlements: EntitlementConfig,
}

impl Default for FilefixConfig {
    fn default() -> Self {
        Self {
            default_style: CasingStyle::default(),
            archive_name: DEFAULT_ARCHIVE_NAME.to_string(),
            compression: ArchiveCompression::default(),
            max_files_per_batch: DEFAULT_MAX_FILES,
            quota: QuotaConfig::default(),
            entitlements: EntitlementConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("filefix")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from `path`.
pub fn load_from_path(path: &Path) -> Result<FilefixConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: FilefixConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FilefixConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FilefixConfig::default();
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
