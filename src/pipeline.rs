//! End-to-end run: fetch, group, render, and splice into the README.

use chrono::{DateTime, Utc};

use crate::config::RunConfig;
use crate::contributions::{group_by_repository, render_markdown};
use crate::error::RunError;
use crate::github::{PullRequestSearch, SearchGateway, SearchQuery};
use crate::readme::{self, Markers};

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Pull requests returned by the search, before filtering.
    pub fetched: usize,
    /// Repositories that received at least one counted pull request.
    pub repositories: usize,
    /// Pull requests included in the rendered summary.
    pub pull_requests: usize,
}

/// Runs the pipeline using the system clock for the README timestamp.
///
/// # Errors
///
/// See [`run_at`].
pub fn run<Gateway: SearchGateway>(
    config: &RunConfig,
    gateway: &Gateway,
) -> Result<RunSummary, RunError> {
    run_at(config, gateway, Utc::now())
}

/// Runs the pipeline with an explicit timestamp.
///
/// The README is read and checked for markers only after the search
/// succeeds, and written once with the complete merged text.
///
/// # Errors
///
/// Returns [`RunError::Search`] when fetching fails and [`RunError::Readme`]
/// when the README cannot be read, lacks markers, or cannot be written. The
/// README is left untouched in every error case.
pub fn run_at<Gateway: SearchGateway>(
    config: &RunConfig,
    gateway: &Gateway,
    now: DateTime<Utc>,
) -> Result<RunSummary, RunError> {
    if config.token.is_none() {
        tracing::warn!("no GitHub token set, using unauthenticated requests (60 req/hr limit)");
    }

    tracing::info!("Fetching OSS contributions...");
    let query = SearchQuery::authored_by(config.username.clone());
    let items = PullRequestSearch::new(gateway).fetch_all(&query)?;
    tracing::info!("Found {} total pull requests", items.len());

    tracing::info!("Grouping by repository...");
    let groups = group_by_repository(
        &items,
        &config.username,
        &config.api_base.repository_prefix(),
    );
    tracing::info!("Contributions to {} external projects", groups.repository_count());

    tracing::info!("Generating markdown...");
    let markdown = render_markdown(&groups);

    tracing::info!("Updating README...");
    let existing = readme::load_or_default(&config.readme_path)?;
    let updated = readme::splice(&existing, &markdown, &Markers::DEFAULT, now)?;
    readme::write(&config.readme_path, &updated)?;
    tracing::info!("{} updated successfully", config.readme_path);

    Ok(RunSummary {
        fetched: items.len(),
        repositories: groups.repository_count(),
        pull_requests: groups.pull_request_count(),
    })
}
