//! Doctor command handler.

use anyhow::Result;
use muxup_core::env::Environment;
use muxup_core::tmux;

pub fn run(env: &Environment) -> Result<()> {
    if tmux::installed() {
        println!("tmux installed: yes");
        match tmux::version() {
            Some(version) => println!("tmux version: {version}"),
            None => println!("tmux version: unknown"),
        }
    } else {
        println!("tmux installed: no");
    }
    println!("default path flag: {}", tmux::default_path_option());
    println!("$EDITOR set: {}", if env.has_editor() { "yes" } else { "no" });
    println!("$SHELL set: {}", if env.has_shell() { "yes" } else { "no" });
    Ok(())
}
