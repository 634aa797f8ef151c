//! The catalog of commands exposed to the user.


use anyhow::Result;

use crate::error::Error;
use crate::project::{APP_MARKER, TEST_MARKER};

/// How a command gathers its arguments before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Fixed subcommand and flags.
    Simple,
    /// The user picks one app, identified by `marker`, which is passed after
    /// the subcommand.
    AppScoped {
        /// File whose presence marks a directory as an app.
        marker: &'static str,
    },
    /// The user types the whole argument list.
    Custom,
}

/// A named `manage.py` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Name used on the command line.
    pub name: &'static str,
    /// One-line description for listings.
    pub about: &'static str,
    /// How arguments are gathered.
    pub kind: CommandKind,
    /// The `manage.py` subcommand. Empty for [`CommandKind::Custom`].
    pub subcommand: &'static str,
    /// Flags appended after the subcommand (and app, if any).
    pub extra_args: &'static [&'static str],
}

const fn simple(name: &'static str, about: &'static str) -> CommandSpec {
    CommandSpec { name, about, kind: CommandKind::Simple, subcommand: name, extra_args: &[] }
}

/// Every command in the order it is listed.
pub const COMMANDS: &[CommandSpec] = &[
    simple("runserver", "Start the development server"),
    simple("syncdb", "Create tables for installed apps"),
    simple("shell", "Open an interactive Python shell"),
    simple("check", "Run the system checks"),
    simple("help", "List manage.py subcommands"),
    simple("migrate", "Apply migrations"),
    simple("test", "Run the whole test suite"),
    CommandSpec {
        name: "test-app",
        about: "Run the tests of one app",
        kind: CommandKind::AppScoped { marker: TEST_MARKER },
        subcommand: "test",
        extra_args: &[],
    },
    CommandSpec {
        name: "schemamigration",
        about: "Create an automatic South schema migration for one app",
        kind: CommandKind::AppScoped { marker: APP_MARKER },
        subcommand: "schemamigration",
        extra_args: &["--auto"],
    },
    CommandSpec {
        name: "list-migrations",
        about: "List migrations and whether they are applied",
        kind: CommandKind::Simple,
        subcommand: "migrate",
        extra_args: &["--list"],
    },
    CommandSpec {
        name: "custom",
        about: "Type any manage.py command line",
        kind: CommandKind::Custom,
        subcommand: "",
        extra_args: &[],
    },
];

impl CommandSpec {
    /// Look up a command by name.
    ///
    /// # Errors
    /// Returns [`Error::UnknownCommand`] when `name` is not in [`COMMANDS`].
    pub fn find(name: &str) -> Result<&'static Self> {
        COMMANDS
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| Error::UnknownCommand(name.to_string()).into())
    }

    /// Arguments that follow `manage.py` once the app (if any) is known.
    #[must_use]
    pub fn args(&self, app: Option<&str>) -> Vec<String> {
        std::iter::once(self.subcommand)
            .chain(app)
            .chain(self.extra_args.iter().copied())
            .map(String::from)
            .collect()
    }
}

/// Split a custom command line with shell quoting rules.
///
/// Returns `Ok(None)` for blank input, which means "do nothing".
///
/// # Errors
/// Returns [`Error::UnbalancedQuotes`] when the line cannot be split.
pub fn split_command_line(line: &str) -> Result<Option<Vec<String>>> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    let parts = shlex::split(line).ok_or_else(|| Error::UnbalancedQuotes(line.to_string()))?;
    Ok(Some(parts))
}
