//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach, and resolves it once into an
//! immutable [`RunConfig`] handed to the pipeline.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.prtally.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `PRTALLY_USERNAME`, `PRTALLY_TOKEN`, or the
//!    legacy `GITHUB_USERNAME` / `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--username`/`-u`, `--token`/`-t`, and
//!    `--readme-path`/`-r`
//!
//! # Configuration File
//!
//! ```toml
//! username = "octocat"
//! token = "ghp_example"
//! readme_path = "README.md"
//! api_base_url = "https://api.github.com"
//! timeout_seconds = 10
//! ```

use std::env;
use std::time::Duration;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::RunError;
use crate::github::gateway::DEFAULT_TIMEOUT;
use crate::github::query::DEFAULT_API_BASE;
use crate::github::{AccessToken, ApiBase, Username};

/// Legacy environment variable naming the GitHub user.
pub const LEGACY_USERNAME_VAR: &str = "GITHUB_USERNAME";
/// Legacy environment variable holding the GitHub token.
pub const LEGACY_TOKEN_VAR: &str = "GITHUB_TOKEN";

const DEFAULT_README_PATH: &str = "README.md";
const DEFAULT_TIMEOUT_SECONDS: u64 = DEFAULT_TIMEOUT.as_secs();

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `PRTALLY_USERNAME`, `GITHUB_USERNAME`, or `--username`: GitHub login
/// - `PRTALLY_TOKEN`, `GITHUB_TOKEN`, or `--token`: Authentication token
/// - `PRTALLY_README_PATH` or `--readme-path`: README to update
/// - `PRTALLY_API_BASE_URL` or `--api-base-url`: API base URL
/// - `PRTALLY_TIMEOUT_SECONDS` or `--timeout-seconds`: Per-request timeout
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use prtally::PrtallyConfig;
///
/// let config = PrtallyConfig::load().expect("failed to load configuration");
/// let run_config = config.resolve().expect("username required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "PRTALLY",
    discovery(
        dotfile_name = ".prtally.toml",
        config_file_name = "prtally.toml",
        app_name = "prtally"
    )
)]
pub struct PrtallyConfig {
    /// GitHub login whose pull requests are summarised.
    ///
    /// Can be provided via:
    /// - CLI: `--username <LOGIN>` or `-u <LOGIN>`
    /// - Environment: `PRTALLY_USERNAME` or `GITHUB_USERNAME` (legacy)
    /// - Config file: `username = "..."`
    #[ortho_config(cli_short = 'u')]
    pub username: Option<String>,

    /// Personal access token for GitHub API authentication.
    ///
    /// Optional: without it requests are anonymous and subject to a much
    /// lower rate limit.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `PRTALLY_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// README file to update.
    ///
    /// Defaults to `README.md` in the working directory.
    #[ortho_config(cli_short = 'r')]
    pub readme_path: String,

    /// GitHub API base URL; override for GitHub Enterprise.
    #[ortho_config()]
    pub api_base_url: String,

    /// Per-request timeout, in seconds.
    #[ortho_config()]
    pub timeout_seconds: u64,
}

impl Default for PrtallyConfig {
    fn default() -> Self {
        Self {
            username: None,
            token: None,
            readme_path: DEFAULT_README_PATH.to_owned(),
            api_base_url: DEFAULT_API_BASE.to_owned(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

/// Validated, immutable settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// User whose pull requests are searched.
    pub username: Username,
    /// Token for authenticated requests, if any.
    pub token: Option<AccessToken>,
    /// README to update.
    pub readme_path: Utf8PathBuf,
    /// API base URL.
    pub api_base: ApiBase,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl PrtallyConfig {
    /// Resolves the username from configuration or the legacy
    /// `GITHUB_USERNAME` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Configuration`] when no source provides a
    /// non-blank value.
    pub fn resolve_username(&self) -> Result<Username, RunError> {
        self.username
            .clone()
            .or_else(|| env::var(LEGACY_USERNAME_VAR).ok())
            .and_then(Username::new)
            .ok_or_else(|| RunError::Configuration {
                message: format!(
                    "{LEGACY_USERNAME_VAR} (or PRTALLY_USERNAME / --username) is required"
                ),
            })
    }

    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable. Blank values count as absent.
    #[must_use]
    pub fn resolve_token(&self) -> Option<AccessToken> {
        self.token
            .clone()
            .or_else(|| env::var(LEGACY_TOKEN_VAR).ok())
            .and_then(AccessToken::new)
    }

    /// Validates the configuration into a [`RunConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Configuration`] when the username is missing, the
    /// README path is blank, the API base URL is invalid, or the timeout is
    /// zero.
    pub fn resolve(&self) -> Result<RunConfig, RunError> {
        let username = self.resolve_username()?;
        let token = self.resolve_token();

        let readme_path = self.readme_path.trim();
        if readme_path.is_empty() {
            return Err(RunError::Configuration {
                message: "README path must not be blank".to_owned(),
            });
        }

        let api_base =
            ApiBase::parse(&self.api_base_url).map_err(|error| RunError::Configuration {
                message: error.to_string(),
            })?;

        if self.timeout_seconds == 0 {
            return Err(RunError::Configuration {
                message: "timeout_seconds must be at least 1".to_owned(),
            });
        }

        Ok(RunConfig {
            username,
            token,
            readme_path: Utf8PathBuf::from(readme_path),
            api_base,
            timeout: Duration::from_secs(self.timeout_seconds),
        })
    }
}
