//! Error types for the mirror pipelines.
//!
//! [`Error`] covers the conditions that stop a run. Failures of individual clones are
//! reported through [`CloneError`] instead: they are recorded in the
//! [`CloneReport`](crate::clone::CloneReport) and never abort a batch.

use std::{io, path::PathBuf};

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that stop a mirror or prune run.
#[derive(Error, Debug)]
pub enum Error {
    /// The token file does not exist or could not be read.
    #[error("Failed to read token file {path:?}: {source}")]
    TokenFileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The token file has no line that is not a comment.
    #[error("Token file {0:?} does not contain a token. Only comment or blank lines were found.")]
    MalformedTokenFile(PathBuf),

    /// The repository name list could not be read.
    #[error("Failed to read repository name list {path:?}: {source}")]
    NameFilterUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// GitHub rejected the credential.
    #[error("Authentication with GitHub failed: {0}")]
    Authentication(String),

    /// The authenticated user is not a member of the requested organization.
    #[error("Organization '{name}' not found. Available organizations: {available}")]
    OrganizationNotFound { name: String, available: String },

    /// The destination directory already exists.
    #[error(
        "A directory `{name}` already exists at `{parent}`. An empty directory is necessary \
         for this operation. Delete the existing destination directory or choose a different \
         name or location, then try again."
    )]
    DestinationConflict {
        path: PathBuf,
        name: String,
        parent: String,
    },

    /// The destination directory could not be created.
    #[error("Failed to create destination directory {path:?}: {source}")]
    DestinationCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Deleting a repository failed. Repositories after it in the batch were not touched.
    #[error("Failed to delete repository {repository} after deleting {deleted} repositories: {source}")]
    DeletionFailure {
        repository: String,
        deleted: usize,
        #[source]
        source: github_client::Error,
    },

    /// The backup made before a prune did not clone every repository.
    #[error("Backup incomplete: {failed} of {attempted} repositories failed to clone. Nothing was deleted.")]
    BackupIncomplete { attempted: usize, failed: usize },

    /// Any other GitHub API failure.
    #[error("GitHub API error: {0}")]
    GitHub(#[source] github_client::Error),
}

impl From<github_client::Error> for Error {
    fn from(value: github_client::Error) -> Self {
        match value {
            github_client::Error::AuthError(message) => Error::Authentication(message),
            other => Error::GitHub(other),
        }
    }
}

/// The failure of a single clone.
///
/// Carries the diagnostic text produced by the clone mechanism.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{diagnostic}")]
pub struct CloneError {
    pub diagnostic: String,
}

impl CloneError {
    pub fn new(diagnostic: impl Into<String>) -> Self {
        Self {
            diagnostic: diagnostic.into(),
        }
    }
}
