use glob::{MatchOptions, Pattern};
use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Marker identifying an app that has models.
pub const APP_MARKER: &str = "models.py";

/// Marker identifying an app that has tests.
pub const TEST_MARKER: &str = "tests.py";

// `*` must not descend into dot-directories like `.git` or `.venv`.
const OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Find every `<dir>/*/<marker>` where `dir` is any directory under `roots`.
///
/// Matches from overlapping roots collapse; the result is sorted by path.
/// Paths are absolute, like the `manage.py` from [`super::locate_manage_py`].
#[must_use]
pub fn find_apps(roots: &[PathBuf], marker: &str) -> Vec<PathBuf> {
    let mut apps = BTreeSet::new();
    for root in roots {
        let dirs = WalkDir::new(super::absolute(root))
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_dir());
        for dir in dirs {
            let escaped = Pattern::escape(&dir.path().to_string_lossy());
            let pattern = Path::new(&escaped).join("*").join(Pattern::escape(marker));
            let Ok(paths) = glob::glob_with(&pattern.to_string_lossy(), OPTIONS) else {
                continue;
            };
            apps.extend(paths.filter_map(Result::ok));
        }
    }
    tracing::debug!(marker, count = apps.len(), "discovered apps");
    apps.into_iter().collect()
}

/// Turn `base_dir/foo/bar/<marker>` into the dotted app label `foo.bar`.
///
/// A match outside `base_dir` keeps every normal segment of its directory.
#[must_use]
pub fn prettify(app_match: &Path, base_dir: &Path) -> String {
    let dir = app_match.parent().unwrap_or(app_match);
    let relative = dir.strip_prefix(base_dir).unwrap_or(dir);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(".")
}
