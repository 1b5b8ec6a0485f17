//! Shared fixtures for end-to-end tests against a mock GitHub API.

use std::time::Duration;

use camino::Utf8PathBuf;
use prtally::{ApiBase, RunConfig, Username};
use tempfile::TempDir;
use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer};

/// Mock GitHub server plus a scratch directory holding the README.
pub struct MockGitHub {
    runtime: Runtime,
    server: MockServer,
    dir: TempDir,
}

impl MockGitHub {
    /// Starts the mock server on a fresh runtime.
    ///
    /// # Panics
    ///
    /// Panics if the runtime or temporary directory cannot be created.
    pub fn start() -> Self {
        let runtime =
            Runtime::new().unwrap_or_else(|error| panic!("failed to start runtime: {error}"));
        let server = runtime.block_on(MockServer::start());
        let dir = TempDir::new()
            .unwrap_or_else(|error| panic!("failed to create temporary directory: {error}"));
        Self {
            runtime,
            server,
            dir,
        }
    }

    /// Registers `mock` with the server.
    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    /// Base URI of the mock server.
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Path of the README inside the scratch directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary path is not UTF-8.
    pub fn readme_path(&self) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(self.dir.path().join("README.md"))
            .unwrap_or_else(|path| panic!("temporary path is not UTF-8: {}", path.display()))
    }

    /// Run settings for `octocat` pointed at the mock server.
    ///
    /// # Panics
    ///
    /// Panics if the mock server URI cannot be parsed.
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            username: Username::new("octocat")
                .unwrap_or_else(|| panic!("username should be valid")),
            token: None,
            readme_path: self.readme_path(),
            api_base: ApiBase::parse(&self.uri())
                .unwrap_or_else(|error| panic!("mock server URI should parse: {error}")),
            timeout: Duration::from_secs(5),
        }
    }

    /// Search item JSON for `repository` as GitHub would report it.
    pub fn item_json(
        &self,
        repository: &str,
        number: u64,
        state: &str,
        merged: bool,
    ) -> serde_json::Value {
        let merged_at = merged.then_some("2025-02-01T00:00:00Z");
        serde_json::json!({
            "number": number,
            "title": format!("Change {number}"),
            "state": state,
            "html_url": format!("https://github.com/{repository}/pull/{number}"),
            "repository_url": format!("{}/repos/{repository}", self.uri()),
            "created_at": "2025-01-01T00:00:00Z",
            "pull_request": { "merged_at": merged_at }
        })
    }
}
