pub mod config;
pub mod doctor;
pub mod project;
pub mod run;
pub mod venv;

use anyhow::{Context as _, Result};
use django_manage::config::Config;
use std::path::PathBuf;

/// Global flags every command needs.
pub struct Context {
    pub roots: Vec<PathBuf>,
    pub config_path: PathBuf,
}

impl Context {
    pub fn new(roots: Vec<PathBuf>, config_path: Option<PathBuf>) -> Result<Self> {
        let roots = if roots.is_empty() {
            vec![std::env::current_dir().context("Could not determine current directory")?]
        } else {
            roots
                .into_iter()
                .map(|root| {
                    std::path::absolute(&root)
                        .with_context(|| format!("Could not resolve root {}", root.display()))
                })
                .collect::<Result<_>>()?
        };
        let config_path = match config_path {
            Some(path) => path,
            None => Config::path()?,
        };
        Ok(Self { roots, config_path })
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from(&self.config_path)
    }
}
