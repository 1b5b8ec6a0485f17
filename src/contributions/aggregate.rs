//! Grouping of raw search results into per-repository contributions.

use crate::github::{SearchItem, Username};

use super::model::{PullRequestRecord, PullRequestState, RepositoryGroups, RepositoryName};

/// Groups search results by target repository.
///
/// Pull requests to repositories owned by `author` are dropped, as are pull
/// requests that are closed without being merged. Results whose
/// `repository_url` does not start with `repository_prefix` followed by
/// `org/project` are skipped with a warning.
pub fn group_by_repository(
    items: &[SearchItem],
    author: &Username,
    repository_prefix: &str,
) -> RepositoryGroups {
    let mut groups = RepositoryGroups::default();

    for item in items {
        let Some(repository) = repository_of(item, repository_prefix) else {
            tracing::warn!("Skipping malformed repo: {}", item.repository_url);
            continue;
        };

        if author.owns(repository.org()) {
            continue;
        }

        let record = to_record(item);
        if !is_contribution(&record) {
            continue;
        }

        groups.push(repository, record);
    }

    groups
}

fn repository_of(item: &SearchItem, repository_prefix: &str) -> Option<RepositoryName> {
    item.repository_url
        .strip_prefix(repository_prefix)
        .and_then(RepositoryName::parse)
}

fn to_record(item: &SearchItem) -> PullRequestRecord {
    PullRequestRecord {
        number: item.number,
        title: item.title.clone(),
        state: PullRequestState::from_api(&item.state),
        url: item.html_url.clone(),
        created_at: item.created_at,
        merged: item.is_merged(),
    }
}

/// Open pull requests and merged ones count; closed-unmerged ones do not.
const fn is_contribution(record: &PullRequestRecord) -> bool {
    record.merged || matches!(record.state, PullRequestState::Open)
}
