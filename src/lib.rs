//! Run Django `manage.py` commands in a new terminal window.
//!
//! The crate finds a project's `manage.py`, lets the user pick an app or type
//! a custom command line, and hands the resulting argv to a platform-specific
//! terminal launcher. A small virtualenv selector stores the interpreter path
//! in the settings file.

pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod project;
pub mod prompt;
pub mod terminal;
pub mod venv;

pub use command::{CommandKind, CommandSpec};
pub use config::Config;
pub use dispatch::{Dispatcher, Outcome};
pub use error::Error;
pub use project::Project;
pub use terminal::{Launcher, Platform, TerminalLauncher};
