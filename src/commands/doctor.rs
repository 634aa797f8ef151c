use anyhow::Result;
use django_manage::{
    dispatch::resolve_interpreter, project::locate_manage_py, venv::Tool, Platform,
};

use super::Context;

pub fn cmd_doctor(ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;
    let platform = Platform::current();

    match locate_manage_py(&ctx.roots) {
        Some(path) => println!("manage.py:    {}", path.display()),
        None => println!("manage.py:    not found"),
    }

    let source = if config.python_bin.is_some() { "settings" } else { "PATH" };
    match resolve_interpreter(&config) {
        Ok(path) => println!("interpreter:  {} ({source})", path.display()),
        Err(e) => println!("interpreter:  {e}"),
    }

    match platform.terminal_program() {
        Some(program) => {
            let state = if which::which(program).is_ok() { "found" } else { "not on PATH" };
            println!("terminal:     {program} ({state}) on {platform}");
        }
        None => println!("terminal:     none for {platform}, commands run unwrapped"),
    }

    let tools = if Tool::is_enabled(&config) { "enabled" } else { "disabled (python_bin unset)" };
    println!("venv tools:   {tools}");
    println!("settings:     {}", ctx.config_path.display());
    Ok(())
}
