use anyhow::Result;
use clap::Subcommand;
use django_manage::config::Config;

use super::Context;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current settings
    Show,
    /// Print the settings file path
    Path,
    /// Write the default settings to disk
    Init,
    /// Set a value (e.g. python_bin ~/.virtualenvs/site/bin/python)
    Set { key: String, value: String },
    /// Get a value
    Get { key: String },
}

pub fn cmd_config(ctx: &Context, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = ctx.load_config()?;
            let pretty = toml::to_string_pretty(&config)?;
            print!("{pretty}");
        }
        ConfigAction::Path => {
            println!("{}", ctx.config_path.display());
        }
        ConfigAction::Init => {
            Config::default().save_to(&ctx.config_path)?;
            println!("Wrote default config to {}", ctx.config_path.display());
        }
        ConfigAction::Set { key, value } => {
            let mut config = ctx.load_config()?;
            config.set_value(&key, &value)?;
            config.save_to(&ctx.config_path)?;
            println!("Set {key} = {value}");
        }
        ConfigAction::Get { key } => {
            let config = ctx.load_config()?;
            println!("{}", config.get_value(&key)?);
        }
    }
    Ok(())
}
