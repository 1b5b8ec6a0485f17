//! Display ordering for grouped contributions.
//!
//! Repositories are ordered by the highest pull request number they contain,
//! largest first. This approximates "most recently contributed to" but only
//! approximately: numbering is per repository, so a young repository with low
//! numbers sorts after an old one even if the contribution is newer. Ties keep
//! the order in which repositories were first seen in the search results.
//!
//! Within a repository, pull requests are ordered by number, largest first.

use std::cmp::Reverse;

use super::model::{PullRequestRecord, RepositoryGroups, RepositoryName};

/// One repository section ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySection<'groups> {
    /// Repository the section describes.
    pub repository: &'groups RepositoryName,
    /// Records in descending number order.
    pub records: Vec<&'groups PullRequestRecord>,
}

/// Orders repositories and their pull requests for display.
#[must_use]
pub fn sections(groups: &RepositoryGroups) -> Vec<RepositorySection<'_>> {
    let mut sections: Vec<RepositorySection<'_>> = groups
        .iter()
        .map(|(repository, records)| {
            let mut ordered: Vec<&PullRequestRecord> = records.iter().collect();
            ordered.sort_by_key(|record| Reverse(record.number));
            RepositorySection {
                repository,
                records: ordered,
            }
        })
        .collect();

    // `groups.iter()` yields first-seen order and the sort is stable.
    sections.sort_by_key(|section| Reverse(max_number(&section.records)));
    sections
}

fn max_number(records: &[&PullRequestRecord]) -> u64 {
    records.iter().map(|record| record.number).max().unwrap_or(0)
}
