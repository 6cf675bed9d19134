//! Project command handlers.

use anyhow::{Context, Result};
use muxup_core::env::Environment;
use muxup_core::locator::Locator;
use muxup_core::project;

pub fn list(env: &Environment) -> Result<()> {
    let locator = Locator::new(env.clone());
    let projects = locator.list_all().context("list projects")?;
    if projects.is_empty() {
        println!("No projects found.");
    } else {
        for name in projects {
            println!("{name}");
        }
    }
    Ok(())
}

pub fn which(env: &Environment, name: &str) -> Result<()> {
    let locator = Locator::new(env.clone());
    let path = locator
        .resolve(name)
        .with_context(|| format!("resolve project '{name}'"))?;
    println!("{}", path.display());
    Ok(())
}

pub fn root(env: &Environment) -> Result<()> {
    let locator = Locator::new(env.clone());
    let root = locator.root_dir().context("resolve project directory")?;
    println!("{}", root.display());
    Ok(())
}

pub fn check(env: &Environment, name: Option<&str>) -> Result<()> {
    let locator = Locator::new(env.clone());
    let path = project::locate(&locator, name)?;
    println!("{}", path.display());
    Ok(())
}
