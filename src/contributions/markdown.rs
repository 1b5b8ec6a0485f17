//! Markdown renderer for grouped contributions.
//!
//! Produces a summary line followed by one table per repository. Output is a
//! pure function of the groups, so rendering the same groups twice yields
//! identical text.

use super::model::{PullRequestRecord, RepositoryGroups};
use super::ordering::{RepositorySection, sections};

/// Web host used for repository links.
pub const GITHUB_WEB_BASE: &str = "https://github.com";

const EMPTY_SUMMARY: &str = "**Total Contributions:** 0 PRs";
const EMPTY_MESSAGE: &str = "No contributions found yet!";
const TABLE_HEADER: &str = "| # | PR | Status |";
const TABLE_DIVIDER: &str = "|---|---|--------|";

/// Renders the contribution summary as Markdown.
///
/// Empty groups render as a fixed two-paragraph message.
#[must_use]
pub fn render_markdown(groups: &RepositoryGroups) -> String {
    if groups.is_empty() {
        return format!("{EMPTY_SUMMARY}\n\n{EMPTY_MESSAGE}");
    }

    let mut lines = vec![summary_line(groups), String::new(), String::new()];
    for section in sections(groups) {
        push_section(&mut lines, &section);
    }

    lines.join("\n")
}

fn summary_line(groups: &RepositoryGroups) -> String {
    format!(
        "**Total Contributions:** {total} PRs across {repositories} projects | **Merged:** {merged} PRs",
        total = groups.pull_request_count(),
        repositories = groups.repository_count(),
        merged = groups.merged_count(),
    )
}

fn push_section(lines: &mut Vec<String>, section: &RepositorySection<'_>) {
    let repository = section.repository;
    lines.push(format!(
        "### [{project}]({GITHUB_WEB_BASE}/{repository})",
        project = repository.project()
    ));
    lines.push(String::new());
    lines.push(TABLE_HEADER.to_owned());
    lines.push(TABLE_DIVIDER.to_owned());
    lines.extend(section.records.iter().map(|record| table_row(record)));
    lines.push(String::new());
}

fn table_row(record: &PullRequestRecord) -> String {
    format!(
        "| #{number} | [{title}]({url}) | {status} |",
        number = record.number,
        title = escape_cell(&record.title),
        url = record.url,
        status = record.status().label(),
    )
}

/// Escapes text for use inside a single Markdown table cell.
///
/// Pipes are backslash-escaped, newlines become spaces, and carriage returns
/// are dropped.
#[must_use]
pub fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ").replace('\r', "")
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
