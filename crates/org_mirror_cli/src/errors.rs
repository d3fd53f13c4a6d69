use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the org-mirror CLI.
///
/// Failures of the mirror and prune flows arrive wrapped in `Error::Core`. The CLI
/// adds the problems it finds itself while merging configuration and arguments.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error occurred while loading or merging configuration.
    ///
    /// Returned when the configuration file cannot be read or parsed, or when no
    /// organization name is known after the command line and file are merged.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A mirror or prune flow failed.
    #[error(transparent)]
    Core(#[from] org_mirror_core::Error),

    /// Invalid command-line arguments were provided.
    ///
    /// Returned for argument combinations clap cannot reject on its own, such as a
    /// names file without any names in it.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl From<github_client::Error> for Error {
    fn from(e: github_client::Error) -> Self {
        Error::Core(e.into())
    }
}
