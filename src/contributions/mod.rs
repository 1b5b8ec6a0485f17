//! Contribution grouping and Markdown rendering.
//!
//! Search results are reduced to pull requests opened against other people's
//! repositories that are either still open or merged, grouped by repository,
//! and rendered as a Markdown summary with one table per repository.
//!
//! # Ordering
//!
//! Repositories are listed by their highest pull request number (largest
//! first), and rows within a repository by number (largest first).

mod aggregate;
mod markdown;
mod model;
mod ordering;
#[cfg(test)]
mod test_support;

pub use aggregate::group_by_repository;
pub use markdown::{GITHUB_WEB_BASE, escape_cell, render_markdown};
pub use model::{
    ContributionStatus, PullRequestRecord, PullRequestState, RepositoryGroups, RepositoryName,
};
pub use ordering::{RepositorySection, sections};
