//! The `prune` command.
//!
//! Deletes the repositories named in a file from the organization. With
//! `--backup-dir` the whole organization is cloned first and nothing is deleted
//! unless every clone succeeded. With `--dry-run` the matching repositories are only
//! listed.

use clap::Args;
use colored::Colorize;
use org_mirror_core::{
    backup_and_prune, filter_org_repos, prune_org_repos, read_name_filter, read_token,
    DeletionReport, GitCloneCommand,
};
use std::path::PathBuf;
use tracing::{info, instrument};

use crate::{
    commands::{
        clone_cmd::{clone_summary, ConsoleObserver},
        connect, CommandOutcome, GlobalOptions,
    },
    errors::Error,
};

#[cfg(test)]
#[path = "prune_cmd_tests.rs"]
mod tests;

/// Arguments of the `prune` command.
#[derive(Args, Debug, Clone)]
pub struct PruneArgs {
    /// File listing the short names of the repositories to delete, one per line
    pub names_file: PathBuf,

    /// File holding the GitHub token on its first non-comment line
    pub token_file: PathBuf,

    /// Clone the whole organization into this new directory before deleting anything
    #[arg(long, value_name = "DIR")]
    pub backup_dir: Option<PathBuf>,

    /// List the repositories that would be deleted without deleting them
    #[arg(long, conflicts_with = "backup_dir")]
    pub dry_run: bool,
}

/// Executes the `prune` command.
///
/// # Errors
///
/// Returns an error when the inputs cannot be read, the organization cannot be
/// listed, the backup is incomplete, or a deletion fails.
#[instrument(skip(options))]
pub async fn execute(args: &PruneArgs, options: &GlobalOptions) -> Result<CommandOutcome, Error> {
    let config = options.load_config()?;
    let org_name = config.organization_name(options.org.as_deref())?;

    let names = read_name_filter(&args.names_file)?;
    if names.is_empty() {
        return Err(Error::InvalidArguments(format!(
            "{:?} lists no repositories",
            args.names_file
        )));
    }

    let token = read_token(&args.token_file)?;
    let client = connect(&config, &token)?;

    if args.dry_run {
        let selected = filter_org_repos(&client, &org_name, &names).await?;
        for repository in &selected {
            println!("Would delete {}", repository.full_name());
        }
        println!("{} of {} named repositories found", selected.len(), names.len());
        return Ok(CommandOutcome::Complete);
    }

    let report = match &args.backup_dir {
        Some(backup_dir) => {
            info!(backup = ?backup_dir, "Backing up the organization before deleting");
            let cloner = GitCloneCommand::with_token(token);
            let (backup, deleted) = backup_and_prune(
                &client,
                &cloner,
                &ConsoleObserver,
                &client,
                &org_name,
                backup_dir,
                &names,
            )
            .await?;
            println!("{}", clone_summary(&backup));
            deleted
        }
        None => prune_org_repos(&client, &client, &org_name, &names).await?,
    };

    print_deletion_report(&report);
    Ok(CommandOutcome::Complete)
}

pub fn print_deletion_report(report: &DeletionReport) {
    for full_name in &report.deleted {
        println!("{} {}", "Deleted".yellow(), full_name);
    }
    println!("Deleted {} repositories", report.deleted.len());
}
