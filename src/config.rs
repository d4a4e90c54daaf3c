//! Configuration and default paths

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::JournalError;

/// Prior calendar days searched for "yesterday" when nothing is configured
pub const DEFAULT_LOOKBACK_DAYS: u32 = 7;

/// Upper bound on the lookback window, roughly ten years
pub const MAX_LOOKBACK_DAYS: u32 = 3660;

/// Get the default journal root (~/bag/journal/)
pub fn default_journal_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(journal_dir_in(&home))
}

fn journal_dir_in(home: &Path) -> PathBuf {
    home.join("bag").join("journal")
}

/// Get the config file path
/// - macOS: ~/Library/Application Support/daybook/config.toml
/// - Linux: ~/.config/daybook/config.toml
/// - Windows: %APPDATA%/daybook/config.toml
pub fn config_file_path() -> Result<PathBuf> {
    let config = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config.join("daybook").join("config.toml"))
}

/// On-disk shape of config.toml. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub journal_dir: Option<String>,
    pub template: Option<String>,
    pub lookback_days: Option<u32>,
    pub skip_weekends: Option<bool>,
    pub editor: Option<String>,
}

/// Fully resolved settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root of the year/month/date tree
    pub journal_dir: PathBuf,

    /// File copied into place when today's entry does not exist yet
    pub template: PathBuf,

    /// How many prior days `--yesterday` may search
    pub lookback_days: u32,

    /// Ignore Saturday and Sunday entries when searching backward
    pub skip_weekends: bool,

    /// Editor command line, takes precedence over $VISUAL / $EDITOR
    pub editor: Option<String>,
}

impl Config {
    /// Load config.toml from the platform config directory, falling back
    /// to defaults when it does not exist.
    pub fn load() -> Result<Self> {
        let path = config_file_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let home = dirs::home_dir().context("Could not determine home directory")?;

        let file = if path.exists() {
            tracing::debug!(path = %path.display(), "reading config");
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read: {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse: {}", path.display()))?
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            FileConfig::default()
        };

        Ok(Self::resolve(file, &home)?)
    }

    /// Apply defaults and path expansion to a parsed config file
    pub fn resolve(file: FileConfig, home: &Path) -> Result<Self, JournalError> {
        let journal_dir = file
            .journal_dir
            .as_deref()
            .map(|raw| expand_home(raw, home))
            .unwrap_or_else(|| journal_dir_in(home));

        // Relative template paths live inside the journal root
        let template = match file.template.as_deref() {
            Some(raw) => {
                let expanded = expand_home(raw, home);
                if expanded.is_absolute() {
                    expanded
                } else {
                    journal_dir.join(expanded)
                }
            }
            None => journal_dir.join("template.md"),
        };

        let lookback_days = file.lookback_days.unwrap_or(DEFAULT_LOOKBACK_DAYS);
        validate_lookback(lookback_days)?;

        let editor = file
            .editor
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());

        Ok(Self {
            journal_dir,
            template,
            lookback_days,
            skip_weekends: file.skip_weekends.unwrap_or(false),
            editor,
        })
    }

    /// Override the lookback window (from `--lookback`)
    pub fn with_lookback(mut self, days: u32) -> Result<Self, JournalError> {
        validate_lookback(days)?;
        self.lookback_days = days;
        Ok(self)
    }
}

fn validate_lookback(days: u32) -> Result<(), JournalError> {
    if days == 0 {
        return Err(JournalError::InvalidConfig(
            "lookback_days must be at least 1".to_string(),
        ));
    }
    if days > MAX_LOOKBACK_DAYS {
        return Err(JournalError::InvalidConfig(format!(
            "lookback_days must be at most {MAX_LOOKBACK_DAYS}, got {days}"
        )));
    }
    Ok(())
}

/// Expand a leading `~` to the home directory
pub fn expand_home(raw: &str, home: &Path) -> PathBuf {
    if raw == "~" {
        home.to_path_buf()
    } else if let Some(rest) = raw.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(raw)
    }
}
