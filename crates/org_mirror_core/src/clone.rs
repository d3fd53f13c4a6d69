//! Cloning a resolved repository set into a destination directory.
//!
//! Every repository is attempted exactly once, one after another. A failed clone is
//! logged and recorded in the [`CloneReport`], and the batch moves on to the next
//! repository. Whatever the clone mechanism leaves behind on failure is not cleaned up.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::errors::CloneError;
use crate::resolver::RepositorySet;

#[cfg(test)]
#[path = "clone_tests.rs"]
mod tests;

/// The operation that copies a remote repository into a local directory.
pub trait CloneCommand {
    /// Clones `source` into the `target` directory.
    ///
    /// # Errors
    ///
    /// Returns a `CloneError` carrying the diagnostic output of the failed clone.
    fn clone_repository(&self, source: &str, target: &Path) -> Result<(), CloneError>;
}

impl<T: CloneCommand + ?Sized> CloneCommand for &T {
    fn clone_repository(&self, source: &str, target: &Path) -> Result<(), CloneError> {
        (**self).clone_repository(source, target)
    }
}

/// Receives the outcome of each clone as soon as it is known.
///
/// Both methods do nothing by default. `()` is the observer that ignores everything.
pub trait CloneObserver {
    fn cloned(&self, _repository: &ClonedRepository) {}

    fn failed(&self, _repository: &FailedClone) {}
}

impl CloneObserver for () {}

/// A repository that was cloned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClonedRepository {
    pub name: String,
    pub source: String,
    pub target: PathBuf,
}

/// A repository whose clone failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedClone {
    pub name: String,
    pub source: String,
    pub error: CloneError,
}

/// The outcome of a clone batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CloneReport {
    pub cloned: Vec<ClonedRepository>,
    pub failed: Vec<FailedClone>,
}

impl CloneReport {
    /// The number of repositories that were attempted.
    pub fn attempted(&self) -> usize {
        self.cloned.len() + self.failed.len()
    }

    /// Returns `true` when every attempted clone succeeded.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Clones every repository of a [`RepositorySet`] with a [`CloneCommand`].
pub struct ClonePipeline<C> {
    command: C,
}

impl<C: CloneCommand> ClonePipeline<C> {
    pub fn new(command: C) -> Self {
        Self { command }
    }

    /// Clones each repository of `repositories` into `destination/<name>`.
    ///
    /// The clone source is the repository URL with a `.git` suffix. Failures never
    /// stop the batch. `observer` hears about every outcome before the next clone
    /// starts.
    pub fn clone_all(
        &self,
        repositories: &RepositorySet,
        destination: &Path,
        observer: &dyn CloneObserver,
    ) -> CloneReport {
        info!(
            count = repositories.len(),
            destination = ?destination,
            "Cloning repositories"
        );

        let mut report = CloneReport::default();
        for (name, url) in repositories {
            let source = clone_source(url);
            let target = destination.join(name);

            match self.command.clone_repository(&source, &target) {
                Ok(()) => {
                    info!("Cloned {} to {}", source, target.display());
                    let cloned = ClonedRepository {
                        name: name.clone(),
                        source,
                        target,
                    };
                    observer.cloned(&cloned);
                    report.cloned.push(cloned);
                }
                Err(error) => {
                    warn!(
                        repo = name.as_str(),
                        source = source.as_str(),
                        "{}",
                        error.diagnostic
                    );
                    let failed = FailedClone {
                        name: name.clone(),
                        source,
                        error,
                    };
                    observer.failed(&failed);
                    report.failed.push(failed);
                }
            }
        }

        info!(
            cloned = report.cloned.len(),
            failed = report.failed.len(),
            "Clone batch finished"
        );
        report
    }
}

/// Appends the `.git` suffix to a repository URL.
pub fn clone_source(url: &url::Url) -> String {
    format!("{}.git", url.as_str())
}
