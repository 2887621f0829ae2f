//! Date range expressions for GitHub search qualifiers.
//!
//! GitHub's search tokenizer mishandles `+` in URL-escaped timestamps, so
//! every timestamp rendered here uses the UTC `Z` suffix form and never a
//! numeric offset.

use chrono::{DateTime, Utc};

/// Timestamp format accepted by GitHub search qualifiers.
///
/// Uses `Z` rather than `+00:00` so the rendered query survives the search
/// endpoint's URL handling.
const GITHUB_UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A half-open or closed date interval for search qualifiers such as
/// `created:` and `updated:`.
///
/// The range performs no date arithmetic and no validation; callers supply
/// timestamps already in GitHub's accepted format (use [`DateRange::since`]
/// or [`DateRange::between`] to guarantee that). A malformed range is
/// rejected by GitHub as a query error, never a crash here.
///
/// # Example
///
/// ```
/// use standup::github::DateRange;
///
/// let open = DateRange::new("2024-01-01T00:00:00Z", None);
/// assert_eq!(open.render(), ">=2024-01-01T00:00:00Z");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    start: String,
    end: Option<String>,
}

impl DateRange {
    /// Creates a range from preformatted timestamp strings.
    ///
    /// With `end` the interval is closed (inclusive on both ends per GitHub
    /// semantics); without it the range is an open-ended inclusive lower
    /// bound.
    #[must_use]
    pub fn new(start: impl Into<String>, end: Option<String>) -> Self {
        Self {
            start: start.into(),
            end,
        }
    }

    /// Creates an open-ended range starting at the given instant.
    #[must_use]
    pub fn since(start: DateTime<Utc>) -> Self {
        Self {
            start: format_utc(start),
            end: None,
        }
    }

    /// Creates a closed range between the given instants.
    #[must_use]
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: format_utc(start),
            end: Some(format_utc(end)),
        }
    }

    /// Renders the range in GitHub's qualifier syntax.
    ///
    /// Closed intervals render as `<start>..<end>`, open-ended ranges as
    /// `>=<start>`.
    #[must_use]
    pub fn render(&self) -> String {
        self.end.as_ref().map_or_else(
            || format!(">={start}", start = self.start),
            |end| format!("{start}..{end}", start = self.start),
        )
    }
}

/// Formats an instant in the UTC form GitHub search accepts.
fn format_utc(instant: DateTime<Utc>) -> String {
    instant.format(GITHUB_UTC_FORMAT).to_string()
}
