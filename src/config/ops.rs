use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::Config;

impl Config {
    /// Default location of the settings file.
    ///
    /// # Errors
    /// Fails when the home directory cannot be determined.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;
        Ok(home.join(".config").join("django-manage").join("config.toml"))
    }

    /// Load settings from `path`; a missing file yields the defaults.
    ///
    /// # Errors
    /// Fails when the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Write settings to `path`, creating parent directories as needed.
    ///
    /// # Errors
    /// Fails when the directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        tracing::debug!(path = %path.display(), "saved settings");
        Ok(())
    }

    /// Get a config value by key. Lists are rendered comma separated.
    ///
    /// # Errors
    /// Fails on an unknown key.
    pub fn get_value(&self, key: &str) -> Result<String> {
        match key {
            "python_bin" => Ok(self.python_bin.clone().unwrap_or_default()),
            "python_virtualenv_paths" => Ok(self.python_virtualenv_paths.join(",")),
            _ => anyhow::bail!("Unknown config key: {key}"),
        }
    }

    /// Set a config value by key. An empty `python_bin` unsets it.
    ///
    /// # Errors
    /// Fails on an unknown key.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "python_bin" => {
                self.python_bin = if value.is_empty() { None } else { Some(value.to_string()) };
            }
            "python_virtualenv_paths" => {
                self.python_virtualenv_paths = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect();
            }
            _ => anyhow::bail!("Unknown config key: {key}"),
        }
        Ok(())
    }
}
