//! Crate for interacting with the GitHub REST API.
//!
//! This crate provides a client for making token-authenticated requests to GitHub. It
//! exposes the two capabilities the mirror needs from GitHub as traits, so that callers
//! can be tested against fakes:
//!
//! - [`OrganizationDirectory`] enumerates the organizations of the authenticated user
//!   and the repositories inside an organization.
//! - [`DeleteCommand`] deletes a repository.

use std::collections::HashMap;

use async_trait::async_trait;
use http::StatusCode;
use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

pub mod errors;
pub use errors::Error;

pub mod models;
pub use models::{Organization, Repository};

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// The number of items requested per page from list endpoints. GitHub caps this at 100.
const PAGE_SIZE: u8 = 100;

/// A client for interacting with the GitHub API, authenticated with a personal token.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Creates a new `GitHubClient` from an authenticated `Octocrab` instance.
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Creates a new `GitHubClient` authenticated with the given token.
    ///
    /// # Arguments
    ///
    /// * `token` - The personal access token.
    /// * `base_uri` - Optional API base URI, e.g. for GitHub Enterprise. Defaults to
    ///   `https://api.github.com`.
    ///
    /// # Errors
    /// Returns `Error::InvalidBaseUri` if the base URI cannot be parsed and
    /// `Error::ApiError` if the client cannot be built.
    pub fn from_token(token: &SecretString, base_uri: Option<&str>) -> Result<Self, Error> {
        let client = create_token_client(token, base_uri)?;
        Ok(Self::new(client))
    }

    /// Fetches the details of a single organization, including its display name.
    #[instrument(skip(self))]
    pub async fn get_organization(&self, login: &str) -> Result<Organization, Error> {
        let path = format!("/orgs/{}", login);
        self.client
            .get::<Organization, _, ()>(path, None::<&()>)
            .await
            .map_err(|e| map_octocrab_error("Failed to get organization", e))
    }

    /// Fetches every page of a list endpoint.
    ///
    /// Pages are requested one after another until a page comes back with fewer items
    /// than the page size.
    async fn get_all_pages<T>(&self, route: &str, message: &str) -> Result<Vec<T>, Error>
    where
        T: DeserializeOwned + Send,
    {
        let mut items = Vec::new();
        let mut page = 1u32;

        loop {
            debug!(route = route, page = page, "Fetching page {} of {}", page, route);

            let parameters = PageParameters {
                per_page: PAGE_SIZE,
                page,
            };
            let batch: Vec<T> = self
                .client
                .get(route, Some(&parameters))
                .await
                .map_err(|e| map_octocrab_error(message, e))?;

            let count = batch.len();
            items.extend(batch);

            if count < PAGE_SIZE as usize {
                break;
            }

            page += 1;
        }

        Ok(items)
    }
}

#[async_trait]
impl OrganizationDirectory for GitHubClient {
    #[instrument(skip(self))]
    async fn list_organizations(&self) -> Result<HashMap<String, Organization>, Error> {
        info!("Listing organizations of the authenticated user");

        let memberships: Vec<Organization> = self
            .get_all_pages("/user/orgs", "Failed to list organizations")
            .await?;

        // The membership listing carries no display names, so each organization is
        // looked up on its own.
        let mut organizations = HashMap::new();
        for membership in memberships {
            let organization = self.get_organization(membership.login()).await?;
            let display_name = organization.display_name().to_string();
            if organizations.contains_key(&display_name) {
                warn!(
                    organization = display_name,
                    login = organization.login(),
                    "Two organizations share a display name, keeping the last one"
                );
            }

            organizations.insert(display_name, organization);
        }

        info!(
            count = organizations.len(),
            "Successfully retrieved organizations"
        );

        Ok(organizations)
    }

    #[instrument(skip(self, organization), fields(org = %organization.login()))]
    async fn list_repositories(&self, organization: &Organization) -> Result<Vec<Repository>, Error> {
        let route = format!("/orgs/{}/repos", organization.login());
        let repositories: Vec<Repository> = self
            .get_all_pages(&route, "Failed to list organization repositories")
            .await?;

        info!(
            org = organization.login(),
            count = repositories.len(),
            "Successfully retrieved repositories"
        );

        Ok(repositories)
    }
}

#[async_trait]
impl DeleteCommand for GitHubClient {
    #[instrument(skip(self, repository), fields(repo = %repository.full_name()))]
    async fn delete_repository(&self, repository: &Repository) -> Result<(), Error> {
        let owner = repository.owner().ok_or_else(|| {
            error!(
                repo = repository.full_name(),
                "Repository full name has no owner, cannot delete"
            );
            Error::InvalidResponse
        })?;

        info!(
            owner = owner,
            repo = repository.short_name(),
            "Deleting repository"
        );

        self.client
            .repos(owner, repository.short_name())
            .delete()
            .await
            .map_err(|e| map_octocrab_error("Failed to delete repository", e))?;

        info!(
            owner = owner,
            repo = repository.short_name(),
            "Successfully deleted repository"
        );

        Ok(())
    }
}

/// Query parameters for paged list endpoints.
#[derive(Debug, Serialize)]
struct PageParameters {
    per_page: u8,
    page: u32,
}

/// Read access to the organizations and repositories visible to a credential.
#[async_trait]
pub trait OrganizationDirectory: Send + Sync {
    /// Lists the organizations the authenticated identity is a member of.
    ///
    /// # Returns
    ///
    /// A map from organization display name to organization. Organizations without a
    /// display name are keyed by their login.
    ///
    /// # Errors
    ///
    /// Returns `Error::AuthError` if the credential is rejected.
    async fn list_organizations(&self) -> Result<HashMap<String, Organization>, Error>;

    /// Lists every repository of the organization visible to the identity.
    ///
    /// The order is the order GitHub returns, which is not guaranteed to be stable
    /// between calls.
    async fn list_repositories(&self, organization: &Organization) -> Result<Vec<Repository>, Error>;
}

/// The remote capability to delete a repository.
#[async_trait]
pub trait DeleteCommand: Send + Sync {
    /// Deletes the repository on GitHub.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the repository does not exist or the credential
    /// lacks the `delete_repo` scope, and `Error::AuthError` if the credential is
    /// rejected.
    async fn delete_repository(&self, repository: &Repository) -> Result<(), Error>;
}

/// Creates an `Octocrab` client authenticated with a personal access token.
///
/// # Arguments
///
/// * `token` - The personal access token.
/// * `base_uri` - Optional API base URI. Defaults to `https://api.github.com`.
///
/// # Errors
///
/// Returns `Error::InvalidBaseUri` if the base URI cannot be parsed and
/// `Error::ApiError` if the client cannot be built.
///
/// # Example
///
/// ```rust,no_run
/// use github_client::{create_token_client, Error};
/// use secrecy::SecretString;
///
/// fn main() -> Result<(), Error> {
///     let token = SecretString::from("ghp_example".to_string());
///     let client = create_token_client(&token, None)?;
///
///     // Use `client` to perform API operations
///     Ok(())
/// }
/// ```
#[instrument(skip(token))]
pub fn create_token_client(token: &SecretString, base_uri: Option<&str>) -> Result<Octocrab, Error> {
    let builder = match base_uri {
        Some(uri) => Octocrab::builder().base_uri(uri).map_err(|e| {
            error!(base_uri = uri, error = %e, "Failed to parse GitHub API base URI");
            Error::InvalidBaseUri(uri.to_string())
        })?,
        None => Octocrab::builder(),
    };

    builder
        .personal_token(token.expose_secret().to_string())
        .build()
        .map_err(|e| {
            error!(error = ?e, "Failed to build Octocrab client with token credentials");
            Error::ApiError()
        })
}

/// Logs an octocrab error and translates it into a client error.
///
/// The translation is based on the HTTP status GitHub returned:
/// - `401` becomes `Error::AuthError`
/// - `404` becomes `Error::NotFound`
/// - `403` or `429` mentioning the rate limit becomes `Error::RateLimitExceeded`
///
/// Connection failures become `Error::Transport`. Everything else becomes
/// `Error::InvalidResponse`.
fn map_octocrab_error(message: &str, e: octocrab::Error) -> Error {
    let mapped = match &e {
        octocrab::Error::GitHub { source, .. } => match source.status_code {
            StatusCode::UNAUTHORIZED => Error::AuthError(source.message.clone()),
            StatusCode::NOT_FOUND => Error::NotFound,
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
                if source.message.to_lowercase().contains("rate limit") =>
            {
                Error::RateLimitExceeded
            }
            _ => Error::InvalidResponse,
        },
        octocrab::Error::Hyper { .. } | octocrab::Error::Service { .. } => {
            Error::Transport(e.to_string())
        }
        _ => Error::InvalidResponse,
    };

    log_octocrab_error(message, e);
    mapped
}

fn log_octocrab_error(message: &str, e: octocrab::Error) {
    match e {
        octocrab::Error::GitHub { source, .. } => error!(
            status = source.status_code.as_u16(),
            error_message = source.message,
            "{}. Received an error from GitHub",
            message
        ),
        octocrab::Error::Serde { source, .. } => error!(
            error_message = source.to_string(),
            "{}. The response could not be deserialized.",
            message
        ),
        octocrab::Error::Uri { source, .. } => error!(
            error_message = source.to_string(),
            "{}. Failed to parse URI.",
            message
        ),
        _ => error!(error_message = e.to_string(), "{}", message),
    };
}
