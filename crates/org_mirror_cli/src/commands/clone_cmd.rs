//! The `clone` command.
//!
//! Creates the destination directory and clones every repository of the organization
//! into it. A repository that fails to clone is reported and skipped.

use clap::Args;
use colored::Colorize;
use org_mirror_core::{
    clone::{ClonedRepository, FailedClone},
    clone_org_repos, read_token, CloneObserver, CloneReport, GitCloneCommand,
};
use std::path::PathBuf;
use tracing::instrument;

use crate::{
    commands::{connect, CommandOutcome, GlobalOptions},
    errors::Error,
};

#[cfg(test)]
#[path = "clone_cmd_tests.rs"]
mod tests;

/// Arguments of the `clone` command.
#[derive(Args, Debug, Clone)]
pub struct CloneArgs {
    /// Directory to create for the clones. It must not exist yet; its parent must.
    pub destination: PathBuf,

    /// File holding the GitHub token on its first non-comment line
    pub token_file: PathBuf,
}

/// Executes the `clone` command.
///
/// # Errors
///
/// Returns an error when the token, configuration, destination or organization
/// listing fails. Failed clones are not errors; they make the outcome partial.
#[instrument(skip(options))]
pub async fn execute(args: &CloneArgs, options: &GlobalOptions) -> Result<CommandOutcome, Error> {
    let config = options.load_config()?;
    let org_name = config.organization_name(options.org.as_deref())?;
    let token = read_token(&args.token_file)?;

    let client = connect(&config, &token)?;
    let cloner = GitCloneCommand::with_token(token);

    let report = clone_org_repos(
        &client,
        &cloner,
        &ConsoleObserver,
        &org_name,
        &args.destination,
    )
    .await?;
    println!("{}", clone_summary(&report));

    Ok(if report.is_complete() {
        CommandOutcome::Complete
    } else {
        CommandOutcome::Partial
    })
}

/// Prints a line for each clone the moment it finishes.
pub struct ConsoleObserver;

impl CloneObserver for ConsoleObserver {
    fn cloned(&self, repository: &ClonedRepository) {
        println!("{} {}", "Cloned".green(), cloned_line(repository));
    }

    fn failed(&self, repository: &FailedClone) {
        eprintln!("{} {}", "Failed to clone".red(), failed_line(repository));
    }
}

pub fn cloned_line(repository: &ClonedRepository) -> String {
    format!(
        "{} to {}",
        repository.source,
        repository.target.display()
    )
}

pub fn failed_line(repository: &FailedClone) -> String {
    format!("{}: {}", repository.source, repository.error)
}

pub fn clone_summary(report: &CloneReport) -> String {
    if report.is_complete() {
        format!("Cloned all {} repositories", report.attempted())
    } else {
        format!(
            "Cloned {} of {} repositories, {} failed",
            report.cloned.len(),
            report.attempted(),
            report.failed.len()
        )
    }
}
