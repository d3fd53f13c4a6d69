use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use org_mirror_cli::commands::{
    clone_cmd::{self, CloneArgs},
    orgs_cmd::{self, OrgsArgs},
    prune_cmd::{self, PruneArgs},
    GlobalOptions, EXIT_FAILURE,
};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// org-mirror CLI: Clone and prune the repositories of a GitHub organization
#[derive(Parser, Debug)]
#[command(name = "org-mirror", version)]
#[command(about = "Clone and prune the repositories of a GitHub organization", long_about = None)]
struct Cli {
    /// Configuration file. Defaults to org-mirror.toml in the current directory.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Organization display name or login. Overrides the configuration file.
    #[arg(long, global = true, value_name = "NAME")]
    org: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clone every repository of the organization into a new directory
    Clone(CloneArgs),

    /// Delete the named repositories of the organization
    Prune(PruneArgs),

    /// List the organizations the token is a member of
    Orgs(OrgsArgs),
}

impl Cli {
    fn global_options(&self) -> GlobalOptions {
        GlobalOptions {
            config: self.config.clone(),
            org: self.org.clone(),
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_env("ORG_MIRROR_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let options = cli.global_options();

    let result = match &cli.command {
        Commands::Clone(args) => clone_cmd::execute(args, &options).await,
        Commands::Prune(args) => prune_cmd::execute(args, &options).await,
        Commands::Orgs(args) => orgs_cmd::execute(args, &options).await,
    };

    match result {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            error!("Error: {e}");
            eprintln!("{} {e}", "Error:".red());
            std::process::exit(EXIT_FAILURE);
        }
    }
}
