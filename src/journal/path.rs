//! Entry path construction

use chrono::{Datelike, NaiveDate};
use std::path::{Path, PathBuf};

/// Compute the entry path for a date under the journal root
///
/// Layout: `<root>/<year>/<month>/<YYYY-MM-DD>.md`, where the month
/// directory is the bare month number (no zero padding).
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use daybook::journal::path::entry_path;
/// use std::path::PathBuf;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
/// let path = entry_path("/home/me/bag/journal", date);
/// assert_eq!(path, PathBuf::from("/home/me/bag/journal/2026/3/2026-03-05.md"));
/// ```
pub fn entry_path<P: AsRef<Path>>(root: P, date: NaiveDate) -> PathBuf {
    root.as_ref()
        .join(date.year().to_string())
        .join(date.month().to_string())
        .join(format!("{}.md", date.format("%Y-%m-%d")))
}
