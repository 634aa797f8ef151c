//! `djm`: run Django `manage.py` commands in a new terminal window.

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use commands::{config::ConfigAction, venv::VenvAction, Context};
use django_manage::{project::APP_MARKER, venv::Tool};

#[derive(Parser)]
#[command(name = "djm", about = "Run Django manage.py commands in a new terminal window")]
struct Cli {
    /// Project folder to search for manage.py (repeatable, defaults to the current directory)
    #[arg(long = "root", value_name = "DIR", global = true)]
    roots: Vec<PathBuf>,

    /// Settings file to use instead of ~/.config/django-manage/config.toml
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a manage.py command by name (see `djm list`)
    Run {
        /// Command name, e.g. runserver, test-app, list-migrations
        #[arg(value_name = "COMMAND")]
        name: String,

        /// App to use instead of asking, for commands that take one
        #[arg(long)]
        app: Option<String>,
    },

    /// Run any manage.py command line, asking for one when omitted
    Custom {
        /// The command line, e.g. "runserver 0.0.0.0:8000 --noreload"
        line: Option<String>,
    },

    /// List the available manage.py commands
    List,

    /// Print the manage.py that commands would use
    Locate,

    /// Print the apps found in the project
    Apps {
        /// File that marks a directory as an app
        #[arg(long, default_value = APP_MARKER)]
        marker: String,
    },

    /// Open a terminal with the selected virtualenv activated
    Terminal,

    /// Run `pip freeze` from the selected virtualenv
    PipFreeze,

    /// Find and select virtualenvs
    Venv {
        #[command(subcommand)]
        action: VenvAction,
    },

    /// Manage django-manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Report what commands would use and whether they can run
    Doctor,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = Context::new(cli.roots, cli.config)?;

    match cli.command {
        Commands::Run { name, app } => commands::run::cmd_run(&ctx, &name, app)?,
        Commands::Custom { line } => commands::run::cmd_custom(&ctx, line.as_deref())?,
        Commands::List => commands::run::cmd_list(),
        Commands::Locate => commands::project::cmd_locate(&ctx)?,
        Commands::Apps { marker } => commands::project::cmd_apps(&ctx, &marker)?,
        Commands::Terminal => commands::venv::cmd_tool(&ctx, Tool::Terminal)?,
        Commands::PipFreeze => commands::venv::cmd_tool(&ctx, Tool::PipFreeze)?,
        Commands::Venv { action } => commands::venv::cmd_venv(&ctx, action)?,
        Commands::Config { action } => commands::config::cmd_config(&ctx, action)?,
        Commands::Doctor => commands::doctor::cmd_doctor(&ctx)?,
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
