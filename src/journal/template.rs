//! Creating today's entry from the template

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// What `ensure_entry` had to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    /// The entry was already on disk and left untouched
    Existing,
    /// The entry was created as a copy of the template
    Created,
    /// The template was missing, so an empty entry was created
    CreatedEmpty,
}

/// Make sure an entry exists at `path`, copying `template` into place if not
///
/// Parent directories (`<year>/<month>`) are created as needed. An existing
/// entry is never overwritten.
pub fn ensure_entry<P: AsRef<Path>, T: AsRef<Path>>(path: P, template: T) -> Result<EntryStatus> {
    let path = path.as_ref();
    let template = template.as_ref();

    if path.is_dir() {
        bail!("Entry path is a directory: {}", path.display());
    }

    if path.is_file() {
        tracing::debug!(path = %path.display(), "entry exists");
        return Ok(EntryStatus::Existing);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    if !template.exists() {
        tracing::warn!(
            template = %template.display(),
            "template not found, creating empty entry"
        );
        fs::write(path, "").with_context(|| format!("Failed to create: {}", path.display()))?;
        return Ok(EntryStatus::CreatedEmpty);
    }

    fs::copy(template, path).with_context(|| {
        format!(
            "Failed to copy {} to {}",
            template.display(),
            path.display()
        )
    })?;
    tracing::info!(path = %path.display(), "created entry from template");

    Ok(EntryStatus::Created)
}
