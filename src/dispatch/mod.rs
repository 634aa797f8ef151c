//! Turn a catalog entry into a launched `manage.py` command.

mod request;


pub use request::CommandRequest;
pub(crate) use request::path_token;

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::command::{split_command_line, CommandKind, CommandSpec};
use crate::config::Config;
use crate::error::Error;
use crate::project::{find_apps, prettify, Project};
use crate::prompt::Interaction;
use crate::terminal::{LaunchHandle, Launcher};

const CUSTOM_CAPTION: &str = "Django manage.py command";

/// What happened to a command.
#[derive(Debug)]
pub enum Outcome {
    /// The request went to the launcher.
    Launched {
        /// The argv that was launched, before terminal wrapping.
        request: CommandRequest,
        /// Join to learn whether the spawn succeeded.
        handle: LaunchHandle,
    },
    /// The user cancelled a pick or entered nothing.
    Cancelled,
}

/// Builds `[interpreter, manage.py, args...]` and hands it to a [`Launcher`].
///
/// Settings and project roots are passed in once; every call re-walks the
/// roots so the answer always reflects the filesystem.
pub struct Dispatcher<'a, L> {
    config: &'a Config,
    roots: &'a [PathBuf],
    launcher: L,
    lookup: fn(&str) -> Option<PathBuf>,
}

impl<'a, L: Launcher> Dispatcher<'a, L> {
    /// Dispatcher over `roots` using `config` for the interpreter.
    pub fn new(config: &'a Config, roots: &'a [PathBuf], launcher: L) -> Self {
        Self { config, roots, launcher, lookup: which_program }
    }

    /// Find programs with `lookup` instead of searching `PATH`.
    #[must_use]
    pub fn with_lookup(mut self, lookup: fn(&str) -> Option<PathBuf>) -> Self {
        self.lookup = lookup;
        self
    }

    /// Run a catalog command, asking `ui` for an app or command line when the
    /// command needs one.
    ///
    /// # Errors
    /// Fails on a missing `manage.py` or interpreter, an unreadable prompt,
    /// or an unsplittable custom line.
    pub fn run(&self, spec: &CommandSpec, ui: &mut dyn Interaction) -> Result<Outcome> {
        match spec.kind {
            CommandKind::Simple => self.dispatch(spec.args(None)),
            CommandKind::AppScoped { marker } => {
                let project = Project::locate(self.roots)?;
                let apps: Vec<String> = find_apps(self.roots, marker)
                    .iter()
                    .map(|path| prettify(path, project.home()))
                    .collect();
                let Some(index) = ui.choose(&format!("{} app", spec.subcommand), &apps)? else {
                    tracing::debug!(command = spec.name, "app pick cancelled");
                    return Ok(Outcome::Cancelled);
                };
                let app = apps.get(index).context("App selection out of range")?;
                self.dispatch(spec.args(Some(app)))
            }
            CommandKind::Custom => {
                let Some(line) = ui.input(CUSTOM_CAPTION)? else {
                    return Ok(Outcome::Cancelled);
                };
                self.run_custom(&line)
            }
        }
    }

    /// Split `line` with shell rules and dispatch it; a blank line does nothing.
    ///
    /// # Errors
    /// See [`Dispatcher::dispatch`]; also fails on unbalanced quotes.
    pub fn run_custom(&self, line: &str) -> Result<Outcome> {
        match split_command_line(line)? {
            Some(args) => self.dispatch(args),
            None => Ok(Outcome::Cancelled),
        }
    }

    /// Launch `manage.py` with `args` from the project home.
    ///
    /// # Errors
    /// Returns [`Error::ManagePyNotFound`] or [`Error::InterpreterNotFound`]
    /// before anything is launched.
    pub fn dispatch(&self, args: Vec<String>) -> Result<Outcome> {
        let request = self.request(args)?;
        let handle = self.launcher.launch(request.clone());
        Ok(Outcome::Launched { request, handle })
    }

    /// Build the request [`Dispatcher::dispatch`] would launch.
    ///
    /// # Errors
    /// See [`Dispatcher::dispatch`].
    pub fn request(&self, args: Vec<String>) -> Result<CommandRequest> {
        let interpreter = resolve_interpreter_with(self.config, self.lookup)?;
        let project = Project::locate(self.roots)?;

        let mut tokens = vec![path_token(&interpreter)?, path_token(&project.manage_py)?];
        tokens.extend(args);
        Ok(CommandRequest::new(tokens).in_dir(project.home()))
    }
}

/// Interpreter names tried on `PATH` when `python_bin` is unset, in order.
pub const FALLBACK_INTERPRETERS: [&str; 2] = ["python3", "python"];

/// The configured `python_bin`, or the first `python3`/`python` on PATH.
///
/// # Errors
/// Returns [`Error::InterpreterNotFound`] when neither is available.
pub fn resolve_interpreter(config: &Config) -> Result<PathBuf> {
    resolve_interpreter_with(config, which_program)
}

/// Like [`resolve_interpreter`], finding programs with `lookup`.
///
/// # Errors
/// Returns [`Error::InterpreterNotFound`] when `lookup` finds none of
/// [`FALLBACK_INTERPRETERS`].
pub fn resolve_interpreter_with(
    config: &Config,
    lookup: impl FnMut(&str) -> Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(bin) = config.python_bin() {
        return Ok(bin);
    }
    let found = FALLBACK_INTERPRETERS
        .into_iter()
        .find_map(lookup)
        .ok_or(Error::InterpreterNotFound)?;
    tracing::debug!(interpreter = %found.display(), "python_bin unset, using PATH");
    Ok(found)
}

fn which_program(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}
