//! Configuration loading and saving.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::Config;
use super::validation::validate_config;

/// Custom configuration directory, set once at startup from `--config`.
static CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Set the configuration directory for the current process. May only be
/// called once, at startup.
pub fn set_config_dir(dir: Option<String>) -> Result<()> {
    CONFIG_DIR
        .set(dir.map(PathBuf::from))
        .map_err(|_| anyhow::anyhow!("Configuration directory already set"))
}

/// Path of iftarr.toml, honoring a custom `--config` directory.
pub fn get_config_path() -> Result<PathBuf> {
    if let Some(Some(custom)) = CONFIG_DIR.get() {
        return Ok(custom.join("iftarr.toml"));
    }
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join("iftarr").join("iftarr.toml"))
}

/// Load the configuration, returning defaults when no file exists yet.
pub fn load() -> Result<Config> {
    let path = get_config_path()?;
    if !path.exists() {
        return Ok(Config::default());
    }
    load_from_path(&path)
}

/// Load and validate configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", path.display()))?;

    validate_config(&config)?;
    Ok(config)
}

/// Persist the configuration atomically: write to a temp file in the target
/// directory, then rename over the old file.
pub fn save(config: &Config) -> Result<()> {
    let path = get_config_path()?;
    let dir = path
        .parent()
        .context("Could not determine config directory")?;
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create config directory {}", dir.display()))?;

    let serialized = toml::to_string_pretty(config).context("Failed to serialize config")?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .context("Failed to create temporary config file")?;
    tmp.write_all(serialized.as_bytes())
        .context("Failed to write temporary config file")?;
    tmp.persist(&path)
        .with_context(|| format!("Failed to replace config at {}", path.display()))?;

    Ok(())
}
