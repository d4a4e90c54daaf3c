//! Journal error types

use chrono::NaiveDate;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JournalError {
    /// Backward search ran out of days without finding an entry
    #[error("no journal found within {days} day(s) before {from}")]
    NoEntryInWindow { from: NaiveDate, days: u32 },

    #[error("failed to launch editor '{program}'")]
    EditorSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("editor '{program}' exited with {status}")]
    EditorFailed { program: String, status: ExitStatus },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
