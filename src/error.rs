//! Errors callers may want to match on.

use std::path::PathBuf;

/// Preconditions that stop a command before anything is launched.
///
/// Everything else (I/O, config parsing, spawning) travels as plain
/// [`anyhow::Error`] with context attached.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// None of the project roots contains a `manage.py`.
    #[error("No manage.py found under {}", display_roots(.roots))]
    ManagePyNotFound {
        /// The roots that were searched.
        roots: Vec<PathBuf>,
    },

    /// `python_bin` is unset and neither `python3` nor `python` is on PATH.
    #[error("No Python interpreter configured. Run: djm venv set, or djm config set python_bin <PATH>")]
    InterpreterNotFound,

    /// A virtualenv tool was invoked while `python_bin` is unset.
    #[error("No virtualenv selected. Run: djm venv set")]
    VirtualenvNotSet,

    /// A custom command line has an unterminated quote or trailing escape.
    #[error("Could not split command line (unbalanced quotes?): {0}")]
    UnbalancedQuotes(String),

    /// The requested command is not in the catalog.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// The requested app is not among the discovered apps.
    #[error("Unknown app: {0}")]
    UnknownApp(String),

    /// The requested virtualenv is not among the discovered ones.
    #[error("Unknown virtualenv: {0}")]
    UnknownVirtualenv(String),
}

fn display_roots(roots: &[PathBuf]) -> String {
    roots
        .iter()
        .map(|r| r.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
