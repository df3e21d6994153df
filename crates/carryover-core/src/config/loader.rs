//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ConfigError, Result};

use super::defaults::config_file_names;
use super::types::Config;
use super::validation::validate_config;

/// Load and validate a configuration file; `.toml` files are read as TOML,
/// anything else as YAML
pub fn load_config(path: &Path) -> Result<Config> {
    info!(path = %path.display(), "loading config");
    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

    let config: Config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(ConfigError::TomlError)?,
        _ => serde_yaml::from_str(&content).map_err(ConfigError::YamlError)?,
    };

    validate_config(&config)?;
    Ok(config)
}

/// Nearest config file at or above `start_dir`, also looking in `.github/`
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let found = start_dir.ancestors().find_map(|dir| {
        config_file_names()
            .into_iter()
            .flat_map(|name| [dir.join(name), dir.join(".github").join(name)])
            .find(|candidate| candidate.is_file())
    });

    match &found {
        Some(path) => debug!(path = %path.display(), "found config file"),
        None => debug!(start_dir = %start_dir.display(), "no config file found"),
    }
    found
}

/// Load configuration from directory (searching parent directories)
pub fn load_config_from_dir(dir: &Path) -> Result<(Config, PathBuf)> {
    let config_path = find_config(dir).ok_or_else(|| ConfigError::NotFound(dir.to_path_buf()))?;

    let config = load_config(&config_path)?;
    Ok((config, config_path))
}

/// Load configuration or use defaults.
///
/// A missing file silently falls back to defaults; a file that exists but
/// fails to load is reported before falling back.
pub fn load_config_or_default(dir: &Path) -> (Config, Option<PathBuf>) {
    match load_config_from_dir(dir) {
        Ok((config, path)) => (config, Some(path)),
        Err(crate::CarryoverError::Config(ConfigError::NotFound(_))) => {
            debug!(dir = %dir.display(), "no config found, using defaults");
            (Config::default(), None)
        }
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "invalid config, using defaults");
            (Config::default(), None)
        }
    }
}
