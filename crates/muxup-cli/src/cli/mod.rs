//! CLI entry and dispatch.

use anyhow::Result;
use clap::Parser;
use muxup_core::env::Environment;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "muxup")]
#[command(version = "0.1")]
#[command(about = "Manage tmux session projects defined in YAML files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// List all known projects
    List,
    /// Print the path a project name resolves to
    Which {
        /// Project name
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Print the active project directory, creating the default if needed
    Root,
    /// Verify that a project file exists and print its path
    Check {
        /// Project name (defaults to the local project file)
        #[arg(value_name = "NAME")]
        name: Option<String>,
    },
    /// Inspect the tmux installation and shell environment
    Doctor,
}

pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let env = Environment::capture();

    match cli.command {
        Commands::List => commands::projects::list(&env),
        Commands::Which { name } => commands::projects::which(&env, &name),
        Commands::Root => commands::projects::root(&env),
        Commands::Check { name } => commands::projects::check(&env, name.as_deref()),
        Commands::Doctor => commands::doctor::run(&env),
    }
}
