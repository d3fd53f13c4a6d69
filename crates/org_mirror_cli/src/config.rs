//! Configuration for the org-mirror CLI.
//!
//! Settings are read from a TOML file. By default that is `org-mirror.toml` in the
//! current directory, which may be absent. A file named with `--config` must exist.
//! Values given on the command line take precedence over the file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::Error;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "org-mirror.toml";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Configuration of the org-mirror CLI.
///
/// # Example TOML Configuration
///
/// ```toml
/// [organization]
/// name = "The Imaging Collective"
///
/// [github]
/// api_base_uri = "https://github.example.com/api/v3"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub organization: OrganizationConfig,

    #[serde(default)]
    pub github: GitHubConfig,
}

/// The organization a run acts on.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationConfig {
    /// Display name or login of the organization.
    pub name: Option<String>,
}

/// Connection settings for the GitHub API.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// Base URI of the API. Unset means `https://api.github.com`.
    pub api_base_uri: Option<String>,
}

impl AppConfig {
    /// Loads configuration from a TOML file at the specified path.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file does not exist, cannot be read, or does not
    /// hold a valid configuration.
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!("Loading configuration from {:?}", path);

        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file not found: {:?}",
                path
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read configuration file: {}", e)))?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse configuration file: {}", e)))?;

        Ok(config)
    }

    /// Loads the configuration named on the command line, or the default file if it
    /// exists.
    ///
    /// A missing default file yields the default configuration. A missing file named
    /// explicitly is an error.
    pub fn load_or_default(explicit_path: Option<&Path>) -> Result<Self, Error> {
        let path = get_config_path(explicit_path);
        if explicit_path.is_none() && !path.exists() {
            debug!("No configuration file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        Self::load(&path)
    }

    /// Returns the organization to act on, preferring the command-line value.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` when neither the command line nor the configuration
    /// names an organization.
    pub fn organization_name(&self, cli_override: Option<&str>) -> Result<String, Error> {
        cli_override
            .or(self.organization.name.as_deref())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                Error::Config(format!(
                    "No organization name given. Pass --org or set [organization] name in {}",
                    DEFAULT_CONFIG_FILENAME
                ))
            })
    }

    /// Returns the GitHub API base URI, if one is configured.
    pub fn api_base_uri(&self) -> Option<&str> {
        self.github.api_base_uri.as_deref()
    }
}

/// Returns the configuration file path to use: the one given on the command line, or
/// the default file name in the current directory.
pub fn get_config_path(config_path: Option<&Path>) -> PathBuf {
    config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILENAME))
}
