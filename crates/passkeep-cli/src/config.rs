use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use passkeep_core::{PolicyConfig, ScryptCost};

use crate::errors::CliError;

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasskeepConfig {
    pub hash: ScryptCost,
    pub policy: PolicyConfig,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Load the config from `explicit`, or from the default path if it exists.
///
/// A missing default file yields the built-in defaults; a missing explicit
/// file is an error.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<PasskeepConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(CliError::not_found(
                format!("Config not found: {}", path.display()),
                "Hint: Check --config or PASSKEEP_CONFIG.",
            )
            .into());
        }
        return read_config(path);
    }
    match default_config_path() {
        Ok(path) if path.exists() => read_config(&path),
        _ => Ok(PasskeepConfig::default()),
    }
}

pub fn read_config(path: &Path) -> anyhow::Result<PasskeepConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("passkeep"));
        }
    }
    Ok(home_dir()?.join(".config").join("passkeep"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
