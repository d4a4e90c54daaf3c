//! Backward search for the most recent prior entry
//!
//! "Yesterday" is whatever entry was written last, as long as it falls
//! within the lookback window. Nothing is created here.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::path::{Path, PathBuf};

use super::path::entry_path;
use crate::error::JournalError;

/// How far back to search and which days count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookbackPolicy {
    /// Number of prior calendar days to check, starting at today - 1
    pub days: u32,

    /// Saturday and Sunday are never candidates (they still use up the window)
    pub skip_weekends: bool,
}

/// An entry found by the backward search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found {
    pub date: NaiveDate,
    pub path: PathBuf,
}

/// Candidate dates, nearest first. Stops early at the start of the calendar.
pub fn candidates(today: NaiveDate, policy: LookbackPolicy) -> impl Iterator<Item = NaiveDate> {
    (1..=u64::from(policy.days))
        .map_while(move |back| today.checked_sub_days(Days::new(back)))
        .filter(move |date| !(policy.skip_weekends && is_weekend(*date)))
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Find the nearest existing entry before `today`
pub fn find_previous<P: AsRef<Path>>(
    root: P,
    today: NaiveDate,
    policy: LookbackPolicy,
) -> Result<Found, JournalError> {
    let root = root.as_ref();

    for date in candidates(today, policy) {
        let path = entry_path(root, date);
        tracing::debug!(%date, path = %path.display(), "checking");
        if path.is_file() {
            return Ok(Found { date, path });
        }
    }

    Err(JournalError::NoEntryInWindow {
        from: today,
        days: policy.days,
    })
}
