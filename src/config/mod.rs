//! Settings file: the active interpreter and the virtualenv search paths.

mod ops;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persisted settings: the active interpreter and where to look for virtualenvs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Interpreter used to run `manage.py`, e.g. `~/.virtualenvs/site/bin/python`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python_bin: Option<String>,
    /// Directory globs whose children are scanned for virtualenvs.
    pub python_virtualenv_paths: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            python_bin: None,
            python_virtualenv_paths: vec!["~/.virtualenvs".to_string()],
        }
    }
}

impl Config {
    /// The configured interpreter, if any.
    #[must_use]
    pub fn python_bin(&self) -> Option<PathBuf> {
        self.python_bin.as_deref().map(PathBuf::from)
    }
}
