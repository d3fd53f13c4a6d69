//! Deleting a resolved subset of repositories on GitHub.
//!
//! Unlike cloning, deletion stops at the first failure. The repositories after the
//! failing one are left untouched so that an unexpected error from a destructive
//! operation is never silently skipped over.

use github_client::{DeleteCommand, Repository};
use tracing::{error, info};

use crate::errors::Error;

#[cfg(test)]
#[path = "deletion_tests.rs"]
mod tests;

/// The outcome of a deletion batch that ran to completion.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeletionReport {
    /// Full names of the deleted repositories, in deletion order.
    pub deleted: Vec<String>,
}

/// Deletes repositories one after another with a [`DeleteCommand`].
pub struct DeletionPipeline<'a, D: ?Sized> {
    command: &'a D,
}

impl<'a, D: DeleteCommand + ?Sized> DeletionPipeline<'a, D> {
    pub fn new(command: &'a D) -> Self {
        Self { command }
    }

    /// Deletes every repository in `repositories`, in order.
    ///
    /// # Errors
    ///
    /// Returns `Error::DeletionFailure` for the first repository that could not be
    /// deleted. Nothing after it is attempted.
    pub async fn delete_all(&self, repositories: &[Repository]) -> Result<DeletionReport, Error> {
        info!(count = repositories.len(), "Deleting repositories");

        let mut report = DeletionReport::default();
        for repository in repositories {
            if let Err(source) = self.command.delete_repository(repository).await {
                error!(
                    repo = repository.full_name(),
                    deleted = report.deleted.len(),
                    remaining = repositories.len() - report.deleted.len() - 1,
                    error = %source,
                    "Failed to delete repository, stopping"
                );
                return Err(Error::DeletionFailure {
                    repository: repository.full_name().to_string(),
                    deleted: report.deleted.len(),
                    source,
                });
            }

            info!(repo = repository.full_name(), "Deleted repository");
            report.deleted.push(repository.full_name().to_string());
        }

        info!(deleted = report.deleted.len(), "Deletion batch finished");
        Ok(report)
    }
}
