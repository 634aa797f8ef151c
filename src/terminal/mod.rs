//! Wrap a command so it runs in a new terminal window.

mod launcher;

#[cfg(test)]
mod tests;

pub use launcher::{LaunchHandle, Launcher, TerminalLauncher};

use std::fmt;
use std::str::FromStr;

/// Operating system family, which decides how a terminal is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    /// `cmd.exe /k`.
    Windows,
    /// `gnome-terminal` running bash.
    Linux,
    /// Terminal.app driven through `osascript`.
    Darwin,
    /// Anything else; commands run unwrapped.
    Other(String),
}

impl Platform {
    /// The platform this binary was built for.
    #[must_use]
    pub fn current() -> Self {
        match std::env::consts::OS {
            "windows" => Self::Windows,
            "linux" => Self::Linux,
            "macos" => Self::Darwin,
            other => Self::Other(other.to_string()),
        }
    }

    /// Directory inside a virtualenv that holds its executables.
    #[must_use]
    pub const fn bin_dir(&self) -> &'static str {
        match self {
            Self::Windows => "Scripts",
            _ => "bin",
        }
    }

    /// Wrap `tokens` in this platform's terminal invocation.
    ///
    /// The tokens are joined with single spaces and no quoting, so a token
    /// containing a space is split again by the shell inside the terminal.
    /// Unknown platforms get the tokens back untouched.
    #[must_use]
    pub fn wrap(&self, tokens: &[String]) -> Vec<String> {
        let command = tokens.join(" ");
        match self {
            Self::Windows => vec!["cmd.exe".into(), "/k".into(), command],
            Self::Linux => vec![
                "gnome-terminal".into(),
                "-e".into(),
                format!("bash -c \"{command}; read line\""),
            ],
            Self::Darwin => vec![
                "osascript".into(),
                "-e".into(),
                r#"tell app "Terminal" to activate"#.into(),
                "-e".into(),
                r#"tell application "System Events" to tell process "Terminal" to keystroke "t" using command down"#.into(),
                "-e".into(),
                format!(r#"tell application "Terminal" to do script "{command}" in front window"#),
            ],
            Self::Other(_) => tokens.to_vec(),
        }
    }

    /// Program the wrapper starts, if this platform wraps commands at all.
    #[must_use]
    pub const fn terminal_program(&self) -> Option<&'static str> {
        match self {
            Self::Windows => Some("cmd.exe"),
            Self::Linux => Some("gnome-terminal"),
            Self::Darwin => Some("osascript"),
            Self::Other(_) => None,
        }
    }
}

/// Accepts the identifiers Python's `platform.system()` reports
/// (`Windows`, `Linux`, `Darwin`) as well as Rust's `std::env::consts::OS`.
impl FromStr for Platform {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "windows" => Self::Windows,
            "linux" => Self::Linux,
            "darwin" | "macos" => Self::Darwin,
            _ => Self::Other(s.to_string()),
        })
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "Windows"),
            Self::Linux => write!(f, "Linux"),
            Self::Darwin => write!(f, "Darwin"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}
