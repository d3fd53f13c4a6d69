//! Error types for GitHub client operations.
//!
//! This module defines the error types that can occur when interacting with the GitHub API
//! through the github_client crate.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// ## Examples
///
/// ```rust,ignore
/// use github_client::{Error, OrganizationDirectory};
///
/// match client.list_organizations().await {
///     Ok(orgs) => println!("Member of {} organizations", orgs.len()),
///     Err(Error::AuthError(msg)) => eprintln!("Authentication failed: {}", msg),
///     Err(Error::RateLimitExceeded) => eprintln!("Rate limit exceeded, retry later"),
///     Err(err) => eprintln!("Other error: {}", err),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The GitHub client could not be constructed.
    #[error("API request failed")]
    ApiError(),

    /// The credential was rejected by GitHub.
    ///
    /// Returned for `401 Unauthorized` responses, for example when the token has
    /// been revoked or has expired. The contained string is GitHub's message.
    #[error("Authentication failed: {0}")]
    AuthError(String),

    /// A base URI supplied for the API could not be parsed.
    #[error("Invalid GitHub API base URI: {0}")]
    InvalidBaseUri(String),

    /// The GitHub API returned a response that could not be used.
    ///
    /// Covers unexpected status codes and bodies that do not match the expected
    /// shape.
    #[error("Invalid response format")]
    InvalidResponse,

    /// The requested resource was not found or is not visible to the credential.
    #[error("Resource not found")]
    NotFound,

    /// GitHub could not be reached, for example because the connection was refused.
    #[error("Failed to reach GitHub: {0}")]
    Transport(String),

    /// GitHub API rate limit has been exceeded.
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}
