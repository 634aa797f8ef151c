use anyhow::{bail, Result};
use django_manage::{
    command::COMMANDS,
    dispatch::{Dispatcher, Outcome},
    prompt::{Interaction, LinePrompt},
    CommandKind, CommandSpec, Error, TerminalLauncher,
};

use super::Context;

#[cfg(test)]
mod tests;

pub fn cmd_run(ctx: &Context, name: &str, app: Option<String>) -> Result<()> {
    let spec = CommandSpec::find(name)?;
    check_app_flag(spec, app.as_deref())?;
    let config = ctx.load_config()?;
    let dispatcher = Dispatcher::new(&config, &ctx.roots, TerminalLauncher::default());

    let outcome = match app {
        Some(app) => dispatcher.run(spec, &mut AppByName(app))?,
        None => dispatcher.run(spec, &mut LinePrompt::stdio())?,
    };
    finish(outcome)
}

pub fn cmd_custom(ctx: &Context, line: Option<&str>) -> Result<()> {
    let config = ctx.load_config()?;
    let dispatcher = Dispatcher::new(&config, &ctx.roots, TerminalLauncher::default());

    let outcome = match line {
        Some(line) => dispatcher.run_custom(line)?,
        None => dispatcher.run(CommandSpec::find("custom")?, &mut LinePrompt::stdio())?,
    };
    finish(outcome)
}

pub fn cmd_list() {
    for spec in COMMANDS {
        println!("{:<16} {}", spec.name, spec.about);
    }
}

/// `--app` only answers the app pick, so other commands refuse it.
fn check_app_flag(spec: &CommandSpec, app: Option<&str>) -> Result<()> {
    match (spec.kind, app) {
        (CommandKind::AppScoped { .. }, _) | (_, None) => Ok(()),
        (_, Some(app)) => bail!("{} does not take an app (got --app {app})", spec.name),
    }
}

/// Wait for the spawn only; the terminal keeps running on its own.
fn finish(outcome: Outcome) -> Result<()> {
    match outcome {
        Outcome::Launched { handle, .. } => handle.wait(),
        Outcome::Cancelled => {
            eprintln!("Cancelled.");
            Ok(())
        }
    }
}

/// Answers the app pick with a name given on the command line.
struct AppByName(String);

impl Interaction for AppByName {
    fn choose(&mut self, _caption: &str, items: &[String]) -> Result<Option<usize>> {
        items
            .iter()
            .position(|item| *item == self.0)
            .map(Some)
            .ok_or_else(|| Error::UnknownApp(self.0.clone()).into())
    }

    fn input(&mut self, _caption: &str) -> Result<Option<String>> {
        Ok(None)
    }
}
