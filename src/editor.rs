//! External editor invocation
//!
//! The editor is picked from, in order: the `editor` config key, `$VISUAL`,
//! `$EDITOR`, and finally `vi`.

use std::path::Path;
use std::process::Command;

use crate::error::JournalError;

const FALLBACK_EDITOR: &str = "vi";

/// A parsed editor command line such as `code --wait`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl EditorCommand {
    /// Split an editor command line on whitespace. Returns None if blank.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace().map(str::to_string);
        let program = words.next()?;
        Some(Self {
            program,
            args: words.collect(),
        })
    }

    /// Pick the first non-blank candidate, falling back to `vi`
    pub fn resolve(configured: Option<&str>, visual: Option<&str>, editor: Option<&str>) -> Self {
        [configured, visual, editor]
            .into_iter()
            .flatten()
            .find_map(Self::parse)
            .unwrap_or_else(|| Self {
                program: FALLBACK_EDITOR.to_string(),
                args: Vec::new(),
            })
    }

    /// Resolve using `$VISUAL` and `$EDITOR` from the environment
    pub fn from_env(configured: Option<&str>) -> Self {
        let visual = std::env::var("VISUAL").ok();
        let editor = std::env::var("EDITOR").ok();
        Self::resolve(configured, visual.as_deref(), editor.as_deref())
    }

    /// Run the editor on `path` in the foreground and wait for it to exit
    pub fn open(&self, path: &Path) -> Result<(), JournalError> {
        tracing::debug!(
            program = %self.program,
            args = ?self.args,
            path = %path.display(),
            "launching editor"
        );

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
            .map_err(|source| JournalError::EditorSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(JournalError::EditorFailed {
                program: self.program.clone(),
                status,
            });
        }

        Ok(())
    }
}
