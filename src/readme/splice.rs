//! Pure text splicing of generated content between README markers.

use chrono::{DateTime, Utc};

use super::error::ReadmeError;

/// Marker opening the generated region.
pub const START_MARKER: &str = "<!-- OSS_CONTRIBUTIONS_START -->";
/// Marker closing the generated region.
pub const END_MARKER: &str = "<!-- OSS_CONTRIBUTIONS_END -->";
/// Marker pair bracketing the last-updated timestamp.
pub const TIMESTAMP_MARKER: &str = "<!-- TIMESTAMP -->";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Marker strings used to locate the generated region and timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers<'a> {
    /// Marker opening the generated region.
    pub start: &'a str,
    /// Marker closing the generated region.
    pub end: &'a str,
    /// Marker that appears twice around the timestamp.
    pub timestamp: &'a str,
}

impl Markers<'static> {
    /// Markers used in generated READMEs.
    pub const DEFAULT: Self = Self {
        start: START_MARKER,
        end: END_MARKER,
        timestamp: TIMESTAMP_MARKER,
    };
}

impl Default for Markers<'static> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Replaces the region between the start and end markers with `generated`.
///
/// The text before and including the start marker and the text from the end
/// marker onwards are kept byte for byte. The generated content is padded with
/// one newline on each side. When the resulting text contains the timestamp
/// marker twice, the text between the two occurrences becomes `now` formatted
/// as `YYYY-MM-DD HH:MM UTC`.
///
/// # Errors
///
/// - [`ReadmeError::MissingMarker`] when either marker is absent.
/// - [`ReadmeError::MarkersOutOfOrder`] when the first end marker precedes the
///   first start marker.
pub fn splice(
    existing: &str,
    generated: &str,
    markers: &Markers<'_>,
    now: DateTime<Utc>,
) -> Result<String, ReadmeError> {
    let start_at = existing
        .find(markers.start)
        .ok_or_else(|| missing(markers.start))?;
    let end_at = existing
        .find(markers.end)
        .ok_or_else(|| missing(markers.end))?;
    if end_at < start_at {
        return Err(ReadmeError::MarkersOutOfOrder {
            start: markers.start.to_owned(),
            end: markers.end.to_owned(),
        });
    }

    let (head, rest) = existing
        .split_once(markers.start)
        .ok_or_else(|| missing(markers.start))?;
    let (_, tail) = rest
        .split_once(markers.end)
        .ok_or_else(|| missing(markers.end))?;

    let spliced = format!(
        "{head}{start}\n{generated}\n{end}{tail}",
        start = markers.start,
        end = markers.end,
    );

    Ok(stamp_timestamp(&spliced, markers.timestamp, now))
}

/// Fills the text between the first two `marker` occurrences with `now`.
///
/// Text without two occurrences is returned unchanged.
#[must_use]
pub fn stamp_timestamp(text: &str, marker: &str, now: DateTime<Utc>) -> String {
    let Some((head, rest)) = text.split_once(marker) else {
        return text.to_owned();
    };
    let Some((_, tail)) = rest.split_once(marker) else {
        return text.to_owned();
    };

    let stamp = now.format(TIMESTAMP_FORMAT);
    format!("{head}{marker}{stamp}{marker}{tail}")
}

fn missing(marker: &str) -> ReadmeError {
    ReadmeError::MissingMarker {
        marker: marker.to_owned(),
    }
}
