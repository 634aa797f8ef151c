use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::dispatch::{path_token, CommandRequest};
use crate::error::Error;
use crate::project::locate_manage_py;

/// Programs run straight from the active virtualenv.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Open a terminal with the virtualenv activated.
    Terminal,
    /// `pip freeze`.
    PipFreeze,
}

impl Tool {
    const fn program(self) -> &'static str {
        match self {
            Self::Terminal => "activate",
            Self::PipFreeze => "pip",
        }
    }

    const fn args(self) -> &'static [&'static str] {
        match self {
            Self::Terminal => &[],
            Self::PipFreeze => &["freeze"],
        }
    }

    /// Whether the tool can run; it needs `python_bin` to find the virtualenv.
    #[must_use]
    pub const fn is_enabled(config: &Config) -> bool {
        config.python_bin.is_some()
    }

    /// Build the request for this tool, run from the project home when there
    /// is one.
    ///
    /// # Errors
    /// Returns [`Error::VirtualenvNotSet`] when `python_bin` is unset.
    pub fn request(self, config: &Config, roots: &[PathBuf]) -> Result<CommandRequest> {
        let python_bin = config.python_bin().ok_or(Error::VirtualenvNotSet)?;
        let bin_dir = python_bin.parent().unwrap_or_else(|| Path::new(""));

        let mut tokens = vec![path_token(&bin_dir.join(self.program()))?];
        tokens.extend(self.args().iter().map(|s| (*s).to_string()));

        let request = CommandRequest::new(tokens);
        let home = locate_manage_py(roots).and_then(|m| m.parent().map(Path::to_path_buf));
        Ok(match home {
            Some(home) => request.in_dir(home),
            None => request,
        })
    }
}
