//! CLI commands

pub mod journal;
