//! Mirroring and pruning of GitHub organizations.
//!
//! The crate resolves which repositories of an organization a run acts on and then
//! either clones all of them into a fresh local directory or deletes a named subset on
//! GitHub. The GitHub API and the clone mechanism are reached through capability
//! traits so the pipelines can run against fakes:
//!
//! - [`github_client::OrganizationDirectory`] lists organizations and repositories
//! - [`github_client::DeleteCommand`] deletes a repository
//! - [`CloneCommand`] clones a repository
//!
//! ## Flow
//!
//! ```text
//! token file ─► OrganizationDirectory ─► resolver ─┬─► destination + ClonePipeline
//!                                                  └─► DeletionPipeline
//! ```
//!
//! Runs are strictly sequential. Every network call is awaited before the next one
//! starts.

use std::collections::HashMap;
use std::path::Path;

use github_client::{DeleteCommand, Organization, OrganizationDirectory, Repository};
use tracing::{info, instrument, warn};

pub mod clone;
pub mod deletion;
pub mod destination;
pub mod errors;
pub mod git;
pub mod resolver;
pub mod token;

pub use clone::{CloneCommand, CloneObserver, ClonePipeline, CloneReport};
pub use deletion::{DeletionPipeline, DeletionReport};
pub use errors::{CloneError, Error};
pub use git::GitCloneCommand;
pub use resolver::{resolve_all, resolve_filtered, RepositorySet};
pub use token::{read_name_filter, read_token};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Finds an organization by display name, falling back to its login.
///
/// # Errors
///
/// Returns `Error::OrganizationNotFound` listing the known organizations when neither
/// matches.
pub fn find_organization<'a>(
    organizations: &'a HashMap<String, Organization>,
    name: &str,
) -> Result<&'a Organization, Error> {
    if let Some(organization) = organizations.get(name) {
        return Ok(organization);
    }

    organizations
        .values()
        .find(|organization| organization.login() == name)
        .ok_or_else(|| {
            let mut available: Vec<&str> = organizations.keys().map(String::as_str).collect();
            available.sort_unstable();
            Error::OrganizationNotFound {
                name: name.to_string(),
                available: if available.is_empty() {
                    "none".to_string()
                } else {
                    available.join(", ")
                },
            }
        })
}

/// Lists the repositories of the named organization.
async fn list_org_repositories(
    directory: &dyn OrganizationDirectory,
    org_name: &str,
) -> Result<Vec<Repository>, Error> {
    let organizations = directory.list_organizations().await?;
    let organization = find_organization(&organizations, org_name)?;

    info!(
        org = organization.display_name(),
        login = organization.login(),
        "Listing organization repositories"
    );
    Ok(directory.list_repositories(organization).await?)
}

/// Keeps the records named in `names`, warning about names that match nothing.
fn select_named<S: AsRef<str>>(records: &[Repository], names: &[S]) -> Vec<Repository> {
    let selected = resolve_filtered(records, names);

    let missing: Vec<&str> = names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| !selected.iter().any(|r| r.short_name() == *name))
        .collect();
    if !missing.is_empty() {
        warn!(
            missing = ?missing,
            "Requested repositories not found in the organization"
        );
    }

    selected
}

/// Clones every repository of an organization into a new directory.
///
/// The destination is created before GitHub is contacted, so an existing destination
/// stops the run before any listing or cloning happens. `observer` is told about each
/// clone as it finishes.
///
/// # Errors
///
/// Returns `Error::DestinationConflict` if `destination` exists, and the GitHub
/// errors of the listing calls. Failed clones are reported in the `CloneReport`.
#[instrument(skip(directory, cloner, observer))]
pub async fn clone_org_repos(
    directory: &dyn OrganizationDirectory,
    cloner: &dyn CloneCommand,
    observer: &dyn CloneObserver,
    org_name: &str,
    destination: &Path,
) -> Result<CloneReport, Error> {
    destination::prepare(destination)?;

    let records = list_org_repositories(directory, org_name).await?;
    let repositories = resolve_all(&records);

    Ok(ClonePipeline::new(cloner).clone_all(&repositories, destination, observer))
}

/// Returns the repositories of an organization whose short name is in `names`.
#[instrument(skip(directory, names))]
pub async fn filter_org_repos<S: AsRef<str>>(
    directory: &dyn OrganizationDirectory,
    org_name: &str,
    names: &[S],
) -> Result<Vec<Repository>, Error> {
    let records = list_org_repositories(directory, org_name).await?;

    Ok(select_named(&records, names))
}

/// Deletes the repositories of an organization whose short name is in `names`.
///
/// # Errors
///
/// Returns `Error::DeletionFailure` at the first repository that could not be
/// deleted. Repositories after it are left in place.
#[instrument(skip(directory, deleter, names))]
pub async fn prune_org_repos<S: AsRef<str>>(
    directory: &dyn OrganizationDirectory,
    deleter: &dyn DeleteCommand,
    org_name: &str,
    names: &[S],
) -> Result<DeletionReport, Error> {
    let selected = filter_org_repos(directory, org_name, names).await?;

    DeletionPipeline::new(deleter).delete_all(&selected).await
}

/// Backs up the whole organization and then deletes the named repositories.
///
/// The organization is listed once. The repositories to delete are chosen from the
/// same listing that was backed up, and nothing is deleted unless every one of them
/// was cloned into `backup_destination`.
///
/// # Errors
///
/// Returns `Error::BackupIncomplete` if any clone failed, and otherwise the errors of
/// [`clone_org_repos`] and [`prune_org_repos`].
#[instrument(skip(directory, cloner, observer, deleter, names))]
pub async fn backup_and_prune<S: AsRef<str>>(
    directory: &dyn OrganizationDirectory,
    cloner: &dyn CloneCommand,
    observer: &dyn CloneObserver,
    deleter: &dyn DeleteCommand,
    org_name: &str,
    backup_destination: &Path,
    names: &[S],
) -> Result<(CloneReport, DeletionReport), Error> {
    destination::prepare(backup_destination)?;

    let records = list_org_repositories(directory, org_name).await?;
    let backup =
        ClonePipeline::new(cloner).clone_all(&resolve_all(&records), backup_destination, observer);
    if !backup.is_complete() {
        return Err(Error::BackupIncomplete {
            attempted: backup.attempted(),
            failed: backup.failed.len(),
        });
    }

    let selected = select_named(&records, names);
    let deleted = DeletionPipeline::new(deleter).delete_all(&selected).await?;
    Ok((backup, deleted))
}
