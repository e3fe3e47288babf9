use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use shellexpand::full;
use thiserror::Error;

use crate::config::types::{ConfigFile, LoggingConfig, ResolvedConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse JSON in {0}: {1}")]
    ParseError(String, #[source] serde_json::Error),

    #[error("config file {path} missing required key: {key}")]
    MissingKey { path: String, key: &'static str },

    #[error("failed to write config file {0}: {1}")]
    WriteError(String, #[source] std::io::Error),

    #[error("home directory not available to expand '{0}'")]
    NoHome(String),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and resolve a JSON config file.
    pub fn load(config_path: &Path) -> Result<ResolvedConfig, ConfigError> {
        let path = expand_path(&config_path.to_string_lossy())?;
        let display = path.display().to_string();

        if !path.exists() {
            return Err(ConfigError::NotFound(display));
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(display.clone(), e))?;

        let cf: ConfigFile = serde_json::from_str(&s)
            .map_err(|e| ConfigError::ParseError(display.clone(), e))?;

        let vault_path = cf
            .vault_path
            .ok_or(ConfigError::MissingKey { path: display.clone(), key: "vault_path" })?;
        let output_path = cf
            .output_path
            .ok_or(ConfigError::MissingKey { path: display, key: "output_path" })?;

        Self::resolve(&vault_path, &output_path, cf.logging.unwrap_or_default())
    }

    /// Resolve paths given directly (flags or interactive prompts).
    pub fn from_paths(vault: &str, output: &str) -> Result<ResolvedConfig, ConfigError> {
        Self::resolve(vault, output, LoggingConfig::default())
    }

    fn resolve(
        vault: &str,
        output: &str,
        log_cfg: LoggingConfig,
    ) -> Result<ResolvedConfig, ConfigError> {
        let vault_path = expand_path(vault)?;
        let output_path = expand_path(output)?;

        // Resolve log file path if present
        let logging = LoggingConfig {
            file: log_cfg
                .file
                .as_deref()
                .map(|file| expand_path(&file.to_string_lossy()))
                .transpose()?,
            ..log_cfg
        };

        Ok(ResolvedConfig { vault_path, output_path, logging })
    }
}

impl ConfigFile {
    pub fn new(vault_path: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            vault_path: Some(vault_path.into()),
            output_path: Some(output_path.into()),
            logging: None,
        }
    }

    /// Write this config as pretty JSON, appending `.json` when missing.
    ///
    /// Returns the path actually written.
    pub fn save(&self, path: &Path) -> Result<PathBuf, ConfigError> {
        let mut path = expand_path(&path.to_string_lossy())?;
        if path.extension().is_none_or(|ext| ext != "json") {
            let mut name = path.as_os_str().to_owned();
            name.push(".json");
            path = PathBuf::from(name);
        }

        let display = path.display().to_string();
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(display.clone(), e))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::WriteError(display.clone(), e))?;
        }
        fs::write(&path, json + "\n").map_err(|e| ConfigError::WriteError(display, e))?;

        Ok(path)
    }
}

/// Config file used when no source is given on the command line.
pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("mdindex").join("config.json");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("mdindex").join("config.json")
}

/// Expand `~` and environment variables in a user-supplied path.
pub fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome(input.to_string()))?;
    Ok(PathBuf::from(expanded.to_string()))
}
