use anyhow::Result;
use clap::Subcommand;
use django_manage::{
    prompt::{Interaction, LinePrompt},
    venv::{find_virtualenvs, position_by_name, select, Tool},
    Launcher, Platform, TerminalLauncher,
};

use super::Context;

#[derive(Subcommand)]
pub enum VenvAction {
    /// List virtualenvs found under python_virtualenv_paths
    List,
    /// Make a virtualenv's interpreter the one commands use
    Set {
        /// Virtualenv name; asks when omitted
        name: Option<String>,
    },
}

pub fn cmd_venv(ctx: &Context, action: VenvAction) -> Result<()> {
    let mut config = ctx.load_config()?;
    let venvs = find_virtualenvs(&config.python_virtualenv_paths, &Platform::current());

    match action {
        VenvAction::List => {
            if venvs.is_empty() {
                eprintln!(
                    "No virtualenvs found under: {}",
                    config.python_virtualenv_paths.join(", ")
                );
            }
            let active = config.python_bin();
            for venv in &venvs {
                let marker = if active.as_ref() == Some(&venv.interpreter()) { "*" } else { " " };
                println!("{marker} {}", venv.label());
            }
        }
        VenvAction::Set { name } => {
            let choice = match name {
                Some(name) => Some(position_by_name(&venvs, &name)?),
                None => {
                    let labels: Vec<String> = venvs.iter().map(|v| v.label()).collect();
                    LinePrompt::stdio().choose("virtualenv", &labels)?
                }
            };
            match select(&mut config, &ctx.config_path, &venvs, choice)? {
                Some(venv) => println!("Set python_bin = {}", venv.interpreter().display()),
                None => eprintln!("Cancelled."),
            }
        }
    }
    Ok(())
}

pub fn cmd_tool(ctx: &Context, tool: Tool) -> Result<()> {
    let config = ctx.load_config()?;
    let request = tool.request(&config, &ctx.roots)?;
    TerminalLauncher::default().launch(request).wait()
}
