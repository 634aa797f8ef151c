use anyhow::Result;
use django_manage::project::{find_apps, prettify, Project};

use super::Context;

pub fn cmd_locate(ctx: &Context) -> Result<()> {
    let project = Project::locate(&ctx.roots)?;
    println!("{}", project.manage_py.display());
    Ok(())
}

pub fn cmd_apps(ctx: &Context, marker: &str) -> Result<()> {
    let project = Project::locate(&ctx.roots)?;
    let apps = find_apps(&ctx.roots, marker);
    if apps.is_empty() {
        eprintln!("No directories containing {marker} found.");
    }
    for app in &apps {
        println!("{}", prettify(app, project.home()));
    }
    Ok(())
}
