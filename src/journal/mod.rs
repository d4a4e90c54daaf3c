//! Core journal operations
//!
//! Entries live under the journal root as `<year>/<month>/<YYYY-MM-DD>.md`,
//! one file per calendar date.

pub mod lookback;
pub mod path;
pub mod template;

pub use lookback::{find_previous, Found, LookbackPolicy};
pub use path::entry_path;
pub use template::{ensure_entry, EntryStatus};
