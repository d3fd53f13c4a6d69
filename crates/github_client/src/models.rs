//! # Models
//!
//! Data models for the GitHub entities the mirror works with: the organizations a user
//! belongs to and the repositories inside them. They deserialize directly from the
//! GitHub REST API responses.

use serde::{Deserialize, Serialize};
use url::Url;

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// Represents a GitHub organization the authenticated user is a member of.
///
/// The `login` is the identifier used in API paths. The `name` is the optional
/// human-readable display name.
///
/// # Examples
///
/// ```rust
/// use github_client::models::Organization;
///
/// let org = Organization::new("tic".to_string(), Some("The Imaging Collective".to_string()));
///
/// assert_eq!(org.display_name(), "The Imaging Collective");
/// assert_eq!(org.login(), "tic");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Organization {
    /// The login of the organization, used in API paths
    login: String,
    /// The display name of the organization, if one is set
    #[serde(default)]
    name: Option<String>,
}

impl Organization {
    /// Creates a new Organization instance.
    pub fn new(login: String, name: Option<String>) -> Self {
        Self { login, name }
    }

    /// Returns the display name, falling back to the login when no name is set.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.login,
        }
    }

    /// Returns the login of the organization.
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Returns the display name as reported by GitHub.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Represents a GitHub repository.
///
/// Only the parts needed to clone or delete the repository are kept: the short name,
/// the full `owner/name` and the web URL of the repository. The web URL is the HTTPS
/// clone location without the `.git` suffix.
///
/// # Examples
///
/// ```rust
/// use github_client::models::Repository;
/// use url::Url;
///
/// let repo = Repository::new(
///     "my-repo".to_string(),
///     "owner/my-repo".to_string(),
///     Url::parse("https://github.com/owner/my-repo").unwrap(),
/// );
///
/// assert_eq!(repo.short_name(), "my-repo");
/// assert_eq!(repo.owner(), Some("owner"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Repository {
    /// The name of the repository
    name: String,
    /// The full name of the repository (owner/name)
    full_name: String,
    /// The web URL of the repository
    #[serde(rename = "html_url")]
    url: Url,
}

impl Repository {
    /// Creates a new Repository instance.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the repository
    /// * `full_name` - The full name including owner (owner/repo)
    /// * `url` - The web URL of the repository, without a `.git` suffix
    pub fn new(name: String, full_name: String, url: Url) -> Self {
        Self {
            name,
            full_name,
            url,
        }
    }

    /// Returns the name of the repository as reported by GitHub.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the full name of the repository (owner/name).
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns the last path segment of the full name.
    pub fn short_name(&self) -> &str {
        self.full_name
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or(self.name.as_str())
    }

    /// Returns the owner part of the full name, if the full name has one.
    pub fn owner(&self) -> Option<&str> {
        self.full_name
            .split_once('/')
            .map(|(owner, _)| owner)
            .filter(|owner| !owner.is_empty())
    }

    /// Returns the web URL of the repository.
    pub fn url(&self) -> &Url {
        &self.url
    }
}
