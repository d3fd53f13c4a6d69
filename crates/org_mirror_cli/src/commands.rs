//! Command modules for the org-mirror CLI.
//!
//! - `clone_cmd`: clone every repository of an organization into a new directory
//! - `prune_cmd`: delete named repositories, optionally after a full backup
//! - `orgs_cmd`: list the organizations the token can see

use std::path::PathBuf;

use github_client::GitHubClient;
use secrecy::SecretString;

use crate::{config::AppConfig, errors::Error};

pub mod clone_cmd;
pub mod orgs_cmd;
pub mod prune_cmd;

/// Exit code when every repository was handled.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code when the run finished but some clones failed.
pub const EXIT_PARTIAL: i32 = 1;

/// Exit code when the run stopped on an error.
pub const EXIT_FAILURE: i32 = 2;

/// How a command that ran to the end went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Complete,
    Partial,
}

impl CommandOutcome {
    pub fn exit_code(self) -> i32 {
        match self {
            CommandOutcome::Complete => EXIT_SUCCESS,
            CommandOutcome::Partial => EXIT_PARTIAL,
        }
    }
}

/// Options shared by every command.
#[derive(Debug, Default, Clone)]
pub struct GlobalOptions {
    /// Configuration file given with `--config`.
    pub config: Option<PathBuf>,

    /// Organization given with `--org`.
    pub org: Option<String>,
}

impl GlobalOptions {
    pub fn load_config(&self) -> Result<AppConfig, Error> {
        AppConfig::load_or_default(self.config.as_deref())
    }
}

/// Builds the GitHub client for a token.
pub(crate) fn connect(config: &AppConfig, token: &SecretString) -> Result<GitHubClient, Error> {
    Ok(GitHubClient::from_token(token, config.api_base_uri())?)
}

#[cfg(test)]
#[path = "commands/test_support.rs"]
pub(crate) mod test_support;
