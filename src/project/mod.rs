//! Locate a Django project's `manage.py` and the apps around it.

mod apps;


pub use apps::{find_apps, prettify, APP_MARKER, TEST_MARKER};

use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::Error;

const MANAGE_PY: &str = "manage.py";

/// A Django project, identified by the `manage.py` found under its roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Path to `manage.py`.
    pub manage_py: PathBuf,
}

impl Project {
    /// Walk `roots` and build a project around the first `manage.py`.
    ///
    /// # Errors
    /// Returns [`Error::ManagePyNotFound`] when no root contains one.
    pub fn locate(roots: &[PathBuf]) -> Result<Self> {
        let manage_py = locate_manage_py(roots).ok_or_else(|| Error::ManagePyNotFound {
            roots: roots.to_vec(),
        })?;
        Ok(Self { manage_py })
    }

    /// Directory holding `manage.py`; commands run from here.
    #[must_use]
    pub fn home(&self) -> &Path {
        self.manage_py.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Return the first file named `manage.py` under any of `roots`.
///
/// Roots are searched in order. Within a directory, files are checked before
/// subdirectories are entered, each in name order, so a top-level `manage.py`
/// wins over one nested deeper. Relative roots are resolved against the
/// current directory, so the returned path is absolute. Nothing is cached.
#[must_use]
pub fn locate_manage_py(roots: &[PathBuf]) -> Option<PathBuf> {
    for root in roots {
        let found = WalkDir::new(absolute(root))
            .sort_by(|a, b| {
                let (a_dir, b_dir) = (a.file_type().is_dir(), b.file_type().is_dir());
                a_dir.cmp(&b_dir).then_with(|| a.file_name().cmp(b.file_name()))
            })
            .into_iter()
            .filter_map(std::result::Result::ok)
            .find(|e| e.file_type().is_file() && e.file_name() == MANAGE_PY);
        if let Some(entry) = found {
            tracing::debug!(path = %entry.path().display(), "found manage.py");
            return Some(entry.into_path());
        }
    }
    None
}

/// `path` made absolute against the current directory, without resolving
/// symlinks. Left as is when the current directory is unavailable.
pub(crate) fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
