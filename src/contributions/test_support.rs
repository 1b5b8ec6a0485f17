//! Builders shared by contribution tests.

use chrono::{TimeZone, Utc};

use super::model::{PullRequestRecord, PullRequestState, RepositoryGroups, RepositoryName};

/// Builds a record with a URL derived from its number.
pub fn record(number: u64, title: &str, state: PullRequestState, merged: bool) -> PullRequestRecord {
    PullRequestRecord {
        number,
        title: title.to_owned(),
        state,
        url: format!("https://github.com/example/pull/{number}"),
        created_at: Utc
            .with_ymd_and_hms(2025, 1, 15, 10, 0, 0)
            .single()
            .unwrap_or_default(),
        merged,
    }
}

/// Builds groups from `(repository, record)` pairs, in order.
pub fn groups(entries: Vec<(&str, PullRequestRecord)>) -> RepositoryGroups {
    let mut groups = RepositoryGroups::default();
    for (name, record) in entries {
        let repository = RepositoryName::parse(name).expect("test repository name should parse");
        groups.push(repository, record);
    }
    groups
}
