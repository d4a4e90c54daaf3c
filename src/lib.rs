//! daybook library
//!
//! Locates, creates and searches dated markdown journal entries.

pub mod config;
pub mod editor;
pub mod error;
pub mod journal;
