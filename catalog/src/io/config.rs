//! Catalog configuration stored in `catalog.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "catalog.toml";

/// Catalog configuration (TOML).
///
/// Missing fields default to the values the catalog has always used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON file holding the whole collection.
    pub data_file: PathBuf,

    /// Latest publication year `add` accepts.
    pub max_year: i32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("library.json"),
            max_year: 2024,
        }
    }
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(anyhow!("data_file must be a non-empty path"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `CatalogConfig::default()`.
pub fn load_config(path: &Path) -> Result<CatalogConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = CatalogConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: CatalogConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    debug!(path = %path.display(), data_file = %cfg.data_file.display(), max_year = cfg.max_year, "config loaded");
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &CatalogConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    super::catalog_file::write_atomic(path, &buf)
}
