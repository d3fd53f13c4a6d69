//! The `orgs` command lists the organizations the token is a member of.

use clap::Args;
use github_client::{Organization, OrganizationDirectory};
use org_mirror_core::read_token;
use std::{collections::HashMap, path::PathBuf};
use tracing::instrument;

use crate::{
    commands::{connect, CommandOutcome, GlobalOptions},
    errors::Error,
};

#[cfg(test)]
#[path = "orgs_cmd_tests.rs"]
mod tests;

/// Arguments of the `orgs` command.
#[derive(Args, Debug, Clone)]
pub struct OrgsArgs {
    /// File holding the GitHub token on its first non-comment line
    pub token_file: PathBuf,
}

#[instrument(skip(options))]
pub async fn execute(args: &OrgsArgs, options: &GlobalOptions) -> Result<CommandOutcome, Error> {
    let config = options.load_config()?;
    let token = read_token(&args.token_file)?;
    let client = connect(&config, &token)?;

    let organizations = client.list_organizations().await?;
    for line in organization_lines(&organizations) {
        println!("{line}");
    }

    Ok(CommandOutcome::Complete)
}

/// Formats organizations as `display name (login)`, sorted by display name.
pub fn organization_lines(organizations: &HashMap<String, Organization>) -> Vec<String> {
    let mut names: Vec<&String> = organizations.keys().collect();
    names.sort();

    names
        .into_iter()
        .map(|name| {
            let login = organizations[name].login();
            if name == login {
                name.clone()
            } else {
                format!("{name} ({login})")
            }
        })
        .collect()
}
