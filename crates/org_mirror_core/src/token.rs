//! Credential and name list files.
//!
//! A token file is plain text. Any line with a `#` in its first two characters is a
//! comment, and the first other non-blank line holds the token:
//!
//! ```text
//! # read:org and repo scopes
//! ghp_0123456789abcdef
//! ```

use std::{fs, path::Path};

use secrecy::SecretString;
use tracing::debug;

use crate::errors::Error;

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;

/// Reads the token from a token file.
///
/// # Errors
///
/// Returns `Error::TokenFileUnreadable` if the file cannot be read and
/// `Error::MalformedTokenFile` if it holds no token.
pub fn read_token(path: &Path) -> Result<SecretString, Error> {
    debug!("Reading token from {:?}", path);

    let content = fs::read_to_string(path).map_err(|source| Error::TokenFileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    parse_token(&content)
        .map(|token| SecretString::from(token.to_string()))
        .ok_or_else(|| Error::MalformedTokenFile(path.to_path_buf()))
}

/// Returns the first line of `content` that is neither a comment nor blank, trimmed.
pub fn parse_token(content: &str) -> Option<&str> {
    content
        .lines()
        .filter(|line| !is_comment(line))
        .map(str::trim)
        .find(|line| !line.is_empty())
}

fn is_comment(line: &str) -> bool {
    line.chars().take(2).any(|c| c == '#')
}

/// Reads a newline separated list of repository names.
///
/// Lines are trimmed and blank lines are dropped. Duplicates and order are kept as
/// they are in the file.
pub fn read_name_filter(path: &Path) -> Result<Vec<String>, Error> {
    debug!("Reading repository names from {:?}", path);

    let content = fs::read_to_string(path).map_err(|source| Error::NameFilterUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
