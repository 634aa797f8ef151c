use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// The argv handed to a launcher, plus the directory it runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    tokens: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl CommandRequest {
    /// A request that runs in the launcher's current directory.
    #[must_use]
    pub const fn new(tokens: Vec<String>) -> Self {
        Self { tokens, working_dir: None }
    }

    /// Run the command from `dir` instead.
    #[must_use]
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// `[program, args...]`.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Directory the command runs in, if one was set.
    #[must_use]
    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }
}

/// Convert a path into a command token.
pub(crate) fn path_token(path: &Path) -> Result<String> {
    path.to_str()
        .map(String::from)
        .with_context(|| format!("Path contains non-UTF-8 characters: {}", path.display()))
}
