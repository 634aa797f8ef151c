//! Discover virtualenvs and make one the active interpreter.

mod tools;


pub use tools::Tool;

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::dispatch::path_token;
use crate::error::Error;
use crate::terminal::Platform;

/// File present in every virtualenv created by `virtualenv`.
pub const VENV_MARKER: &str = "activate_this.py";

/// A discovered virtualenv.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Virtualenv {
    /// Folder name of the virtualenv.
    pub name: String,
    /// The `bin` (or `Scripts`) directory holding its executables.
    pub bin_dir: PathBuf,
}

impl Virtualenv {
    /// Interpreter path stored as `python_bin` when this env is selected.
    #[must_use]
    pub fn interpreter(&self) -> PathBuf {
        self.bin_dir.join("python")
    }

    /// `name  path`, for menus.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}  {}", self.name, self.bin_dir.display())
    }
}

/// Expand a leading `~` to the home directory.
#[must_use]
pub fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(['/', '\\']) => rest,
        _ => return PathBuf::from(path),
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
        None => PathBuf::from(path),
    }
}

/// Find `<search>/*/<bin>/activate_this.py` under every search path.
///
/// Search paths may themselves be globs. The result is sorted by location
/// and holds each virtualenv once.
#[must_use]
pub fn find_virtualenvs(search_paths: &[String], platform: &Platform) -> Vec<Virtualenv> {
    let mut bin_dirs = BTreeSet::new();
    for search in search_paths {
        let pattern = expand_home(search)
            .join("*")
            .join(platform.bin_dir())
            .join(VENV_MARKER);
        let Ok(paths) = glob::glob(&pattern.to_string_lossy()) else {
            tracing::warn!(pattern = %pattern.display(), "invalid virtualenv search pattern");
            continue;
        };
        bin_dirs.extend(
            paths
                .filter_map(std::result::Result::ok)
                .filter_map(|marker| marker.parent().map(Path::to_path_buf)),
        );
    }
    bin_dirs
        .into_iter()
        .filter_map(|bin_dir| {
            let name = bin_dir.parent()?.file_name()?.to_string_lossy().into_owned();
            Some(Virtualenv { name, bin_dir })
        })
        .collect()
}

/// Index of the virtualenv called `name`.
///
/// # Errors
/// Returns [`Error::UnknownVirtualenv`] when there is none.
pub fn position_by_name(venvs: &[Virtualenv], name: &str) -> Result<usize> {
    venvs
        .iter()
        .position(|v| v.name == name)
        .ok_or_else(|| Error::UnknownVirtualenv(name.to_string()).into())
}

/// Apply a pick: store the chosen interpreter and save the settings file.
///
/// `None` is a cancelled pick and leaves both the settings and the file alone.
///
/// # Errors
/// Fails when `choice` is out of range or the settings cannot be written.
pub fn select(
    config: &mut Config,
    config_path: &Path,
    venvs: &[Virtualenv],
    choice: Option<usize>,
) -> Result<Option<Virtualenv>> {
    let Some(index) = choice else {
        return Ok(None);
    };
    let venv = venvs.get(index).context("Virtualenv selection out of range")?;
    config.python_bin = Some(path_token(&venv.interpreter())?);
    config.save_to(config_path)?;
    tracing::info!("Virtual environment \"{}\" is set", venv.name);
    Ok(Some(venv.clone()))
}
