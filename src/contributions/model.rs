//! Data model for grouped pull request contributions.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};

/// Lifecycle state of a pull request as reported by the search API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullRequestState {
    /// Still open for review.
    Open,
    /// Closed, whether merged or not.
    Closed,
}

impl PullRequestState {
    /// Parses the API `state` field; anything other than `open` is closed.
    #[must_use]
    pub fn from_api(value: &str) -> Self {
        if value.eq_ignore_ascii_case("open") {
            Self::Open
        } else {
            Self::Closed
        }
    }
}

/// A pull request kept for the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRecord {
    /// Pull request number, unique within its repository.
    pub number: u64,
    /// Title as written by the author.
    pub title: String,
    /// Open or closed.
    pub state: PullRequestState,
    /// HTML URL of the pull request.
    pub url: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// True when the pull request carries a merge timestamp.
    pub merged: bool,
}

/// Status shown in the rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContributionStatus {
    /// The pull request was merged.
    Merged,
    /// The pull request is still open.
    Open,
    /// Closed and unmerged; filtered out before rendering in practice.
    Unknown,
}

impl ContributionStatus {
    /// Label written into the status column.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Merged => "Merged",
            Self::Open => "Open",
            Self::Unknown => "Unknown",
        }
    }
}

impl PullRequestRecord {
    /// Returns the status shown for this pull request.
    ///
    /// Merged takes priority over the raw state.
    #[must_use]
    pub const fn status(&self) -> ContributionStatus {
        if self.merged {
            ContributionStatus::Merged
        } else if matches!(self.state, PullRequestState::Open) {
            ContributionStatus::Open
        } else {
            ContributionStatus::Unknown
        }
    }
}

/// Repository identified as `org/project`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RepositoryName {
    org: String,
    project: String,
}

impl RepositoryName {
    /// Parses `org/project`.
    ///
    /// Returns `None` unless the value is exactly two non-empty segments.
    #[must_use]
    pub fn parse(full_name: &str) -> Option<Self> {
        // Stricter than splitting on the first `/`: nested paths such as
        // `a/b/c` and empty segments are skipped along with separator-less
        // names.
        let (org, project) = full_name.split_once('/')?;
        if org.is_empty() || project.is_empty() || project.contains('/') {
            return None;
        }
        Some(Self {
            org: org.to_owned(),
            project: project.to_owned(),
        })
    }

    /// Owning organisation or user.
    #[must_use]
    pub const fn org(&self) -> &str {
        self.org.as_str()
    }

    /// Project name within the organisation.
    #[must_use]
    pub const fn project(&self) -> &str {
        self.project.as_str()
    }
}

impl fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.org, self.project)
    }
}

/// Pull requests grouped by target repository.
///
/// Repositories keep the order in which they were first seen, and records
/// within a group keep the order in which they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryGroups {
    groups: Vec<(RepositoryName, Vec<PullRequestRecord>)>,
    positions: HashMap<RepositoryName, usize>,
}

impl RepositoryGroups {
    /// Appends a record to the group for `repository`.
    pub fn push(&mut self, repository: RepositoryName, record: PullRequestRecord) {
        if let Some(records) = self
            .positions
            .get(&repository)
            .and_then(|&position| self.groups.get_mut(position))
            .map(|(_, records)| records)
        {
            records.push(record);
            return;
        }

        self.positions.insert(repository.clone(), self.groups.len());
        self.groups.push((repository, vec![record]));
    }

    /// Returns true when no repository has any record.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of distinct repositories.
    #[must_use]
    pub const fn repository_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of records across all repositories.
    #[must_use]
    pub fn pull_request_count(&self) -> usize {
        self.groups.iter().map(|(_, records)| records.len()).sum()
    }

    /// Number of merged records across all repositories.
    #[must_use]
    pub fn merged_count(&self) -> usize {
        self.records().filter(|record| record.merged).count()
    }

    /// Records of one repository, if present.
    #[must_use]
    pub fn get(&self, repository: &RepositoryName) -> Option<&[PullRequestRecord]> {
        self.positions
            .get(repository)
            .and_then(|&position| self.groups.get(position))
            .map(|(_, records)| records.as_slice())
    }

    /// Iterates repositories in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&RepositoryName, &[PullRequestRecord])> {
        self.groups
            .iter()
            .map(|(name, records)| (name, records.as_slice()))
    }

    /// Iterates every record across all repositories.
    pub fn records(&self) -> impl Iterator<Item = &PullRequestRecord> {
        self.groups.iter().flat_map(|(_, records)| records)
    }
}
