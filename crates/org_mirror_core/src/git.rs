//! Local Git clone operations.
//!
//! This module provides the [`CloneCommand`] used for real runs, backed by git2.
//!
//! For GitHub API operations (listing and deleting repositories), see the
//! `github_client` crate.

use std::path::Path;

use git2::build::RepoBuilder;
use git2::{Cred, CredentialType, FetchOptions, RemoteCallbacks};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, error};

use crate::clone::CloneCommand;
use crate::errors::CloneError;

/// Clones repositories with libgit2.
///
/// When a token is supplied, HTTPS credential requests are answered with the
/// `x-access-token` user and the token as password, which is how GitHub accepts
/// personal access tokens over HTTPS. Without a token the clone is anonymous and
/// only public repositories can be cloned.
pub struct GitCloneCommand {
    token: Option<SecretString>,
}

impl GitCloneCommand {
    /// Creates a clone command that authenticates with `token`.
    pub fn with_token(token: SecretString) -> Self {
        Self { token: Some(token) }
    }

    /// Creates a clone command that does not authenticate.
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    fn callbacks(&self) -> RemoteCallbacks<'_> {
        let mut callbacks = RemoteCallbacks::new();
        let token = self.token.as_ref();

        callbacks.credentials(move |url, username_from_url, allowed_types| {
            debug!(
                "Git credential callback triggered - URL: {}, username: {:?}, allowed types: {:?}",
                url, username_from_url, allowed_types
            );

            match token {
                Some(token) if allowed_types.contains(CredentialType::USER_PASS_PLAINTEXT) => {
                    Cred::userpass_plaintext("x-access-token", token.expose_secret())
                }
                Some(_) => {
                    error!(
                        "No supported credential types available. Allowed types: {:?}",
                        allowed_types
                    );
                    Err(git2::Error::from_str(
                        "No supported credential types for GitHub authentication",
                    ))
                }
                None => Err(git2::Error::from_str(
                    "Authentication required but no token was supplied",
                )),
            }
        });

        callbacks.transfer_progress(|progress| {
            debug!(
                "Transfer progress - objects: {}/{}, bytes: {}",
                progress.received_objects(),
                progress.total_objects(),
                progress.received_bytes()
            );
            true
        });

        callbacks
    }
}

impl CloneCommand for GitCloneCommand {
    fn clone_repository(&self, source: &str, target: &Path) -> Result<(), CloneError> {
        debug!("Cloning {} into {:?}", source, target);

        let mut fetch_options = FetchOptions::new();
        fetch_options.remote_callbacks(self.callbacks());

        RepoBuilder::new()
            .fetch_options(fetch_options)
            .clone(source, target)
            .map(|_| ())
            .map_err(|e| {
                debug!(
                    "Clone failed - code: {:?}, class: {:?}",
                    e.code(),
                    e.class()
                );
                CloneError::new(describe_clone_error(&e))
            })
    }
}

fn describe_clone_error(e: &git2::Error) -> String {
    match e.class() {
        git2::ErrorClass::Net => format!(
            "Network error during clone: {}. Check internet connection and repository URL.",
            e.message()
        ),
        git2::ErrorClass::Http => format!(
            "HTTP error during clone: {}. This may indicate authentication or permission issues.",
            e.message()
        ),
        git2::ErrorClass::Callback => format!(
            "Authentication callback error: {}. The token may be invalid or expired.",
            e.message()
        ),
        _ => format!(
            "Git operation failed: {} (class: {:?})",
            e.message(),
            e.class()
        ),
    }
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
