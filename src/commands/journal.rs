//! Journal command - Open or print today's entry, or the most recent prior one

use anyhow::{Context, Result};
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use daybook::config::Config;
use daybook::editor::EditorCommand;
use daybook::journal::{self, EntryStatus, LookbackPolicy};

/// Options for the journal command
#[derive(Debug, Clone, Copy)]
pub struct JournalOptions {
    /// Date treated as today
    pub today: NaiveDate,

    /// Search backward instead of using today's entry
    pub yesterday: bool,

    /// Print instead of edit
    pub output: bool,
}

/// An entry picked for editing or printing
#[derive(Debug, PartialEq, Eq)]
pub struct ResolvedEntry {
    pub date: NaiveDate,
    pub path: PathBuf,
    /// Set when the entry was just created for today
    pub created: Option<EntryStatus>,
}

/// Execute the journal command against the real stdout, stderr and editor
pub fn execute(config: &Config, options: JournalOptions) -> Result<()> {
    let editor = EditorCommand::from_env(config.editor.as_deref());
    let stdout = io::stdout();
    let stderr = io::stderr();
    run(
        config,
        options,
        &editor,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
}

/// Resolve the entry, report status lines to `status`, then print to `out`
/// or open `editor`
pub fn run<O: Write, S: Write>(
    config: &Config,
    options: JournalOptions,
    editor: &EditorCommand,
    out: &mut O,
    status: &mut S,
) -> Result<()> {
    let entry = resolve_entry(config, options.today, options.yesterday)?;

    match entry.created {
        Some(EntryStatus::Created) => writeln!(
            status,
            "{} {} from {}",
            "Created".green(),
            entry.path.display(),
            config.template.display()
        )?,
        Some(EntryStatus::CreatedEmpty) => writeln!(
            status,
            "{} {} (template {} not found)",
            "Created empty".yellow(),
            entry.path.display(),
            config.template.display()
        )?,
        _ => {}
    }

    if options.yesterday && Some(entry.date) != options.today.pred_opt() {
        writeln!(
            status,
            "{}",
            format!("Most recent entry is from {}", entry.date).dimmed()
        )?;
    }

    if options.output {
        print_entry(&entry.path, out)?;
    } else {
        editor.open(&entry.path)?;
    }

    Ok(())
}

/// Compute the entry to work on, creating today's from the template if needed
pub fn resolve_entry(config: &Config, today: NaiveDate, yesterday: bool) -> Result<ResolvedEntry> {
    tracing::debug!(%today, yesterday, root = %config.journal_dir.display(), "resolving entry");

    if yesterday {
        let policy = LookbackPolicy {
            days: config.lookback_days,
            skip_weekends: config.skip_weekends,
        };
        let found = journal::find_previous(&config.journal_dir, today, policy)?;
        tracing::debug!(date = %found.date, path = %found.path.display(), "found previous entry");
        return Ok(ResolvedEntry {
            date: found.date,
            path: found.path,
            created: None,
        });
    }

    let path = journal::entry_path(&config.journal_dir, today);
    let status = journal::ensure_entry(&path, &config.template)?;

    Ok(ResolvedEntry {
        date: today,
        path,
        created: (status != EntryStatus::Existing).then_some(status),
    })
}

/// Write an entry's bytes verbatim
///
/// A reader that goes away early (`daybook -o | head`) is not an error.
pub fn print_entry<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let content = fs::read(path).with_context(|| format!("Failed to read: {}", path.display()))?;

    match out.write_all(&content).and_then(|()| out.flush()) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed before entry was fully written");
            Ok(())
        }
        result => result.context("Failed to write entry"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daybook::error::JournalError;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_config(root: &Path) -> Config {
        Config {
            journal_dir: root.to_path_buf(),
            template: root.join("template.md"),
            lookback_days: 7,
            skip_weekends: false,
            editor: None,
        }
    }

    #[test]
    fn test_today_created_from_template() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        fs::write(&config.template, "## Log\n").unwrap();

        let entry = resolve_entry(&config, date(2026, 10, 16), false).unwrap();

        assert_eq!(entry.path, dir.path().join("2026/10/2026-10-16.md"));
        assert_eq!(entry.created, Some(EntryStatus::Created));
        assert_eq!(fs::read_to_string(&entry.path).unwrap(), "## Log\n");
    }

    #[test]
    fn test_today_existing() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        let path = dir.path().join("2026/10/2026-10-16.md");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "morning notes").unwrap();

        let entry = resolve_entry(&config, date(2026, 10, 16), false).unwrap();

        assert_eq!(entry.created, None);
        assert_eq!(fs::read_to_string(&entry.path).unwrap(), "morning notes");
    }

    #[test]
    fn test_yesterday_does_not_create() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        fs::write(&config.template, "t").unwrap();

        let err = resolve_entry(&config, date(2026, 10, 16), true).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<JournalError>(),
            Some(JournalError::NoEntryInWindow { .. })
        ));
        assert!(!dir.path().join("2026").exists());
    }

    #[test]
    fn test_yesterday_finds_prior_entry() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        let path = dir.path().join("2026/10/2026-10-12.md");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "monday").unwrap();

        let entry = resolve_entry(&config, date(2026, 10, 16), true).unwrap();

        assert_eq!(entry.date, date(2026, 10, 12));
        assert_eq!(entry.path, path);
        assert_eq!(entry.created, None);
    }

    #[test]
    fn test_print_entry() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("e.md");
        fs::write(&path, "line one\nline two\n").unwrap();

        let mut out = Vec::new();
        print_entry(&path, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "line one\nline two\n");
    }

    #[test]
    fn test_print_missing_entry() {
        let dir = TempDir::new().unwrap();
        let mut out = Vec::new();
        assert!(print_entry(&dir.path().join("gone.md"), &mut out).is_err());
    }

    #[test]
    fn test_print_entry_is_byte_exact() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("e.md");
        let bytes = b"caf\xe9 latin-1\n\xff\xfe".to_vec();
        fs::write(&path, &bytes).unwrap();

        let mut out = Vec::new();
        print_entry(&path, &mut out).unwrap();

        assert_eq!(out, bytes);
    }

    /// Writer whose reader has gone away
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    /// Writer that fails for any other reason
    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("no space left"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_print_entry_closed_pipe_is_ok() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("e.md");
        fs::write(&path, "plenty of notes\n".repeat(1000)).unwrap();

        assert!(print_entry(&path, &mut ClosedPipe).is_ok());
    }

    #[test]
    fn test_print_entry_other_write_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("e.md");
        fs::write(&path, "notes").unwrap();

        assert!(print_entry(&path, &mut FullDisk).is_err());
    }

    fn write_entry(root: &Path, d: NaiveDate, content: &str) -> PathBuf {
        let path = journal::entry_path(root, d);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    fn editor(line: &str) -> EditorCommand {
        EditorCommand::parse(line).unwrap()
    }

    fn options(yesterday: bool, output: bool) -> JournalOptions {
        JournalOptions {
            today: date(2026, 10, 16),
            yesterday,
            output,
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_run_output_prints_without_editor() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        fs::write(&config.template, "## Log\n").unwrap();

        let (mut out, mut status) = (Vec::new(), Vec::new());
        // `false` would fail the run if it were launched
        run(&config, options(false, true), &editor("false"), &mut out, &mut status).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "## Log\n");
        let status = String::from_utf8(status).unwrap();
        assert!(status.contains("Created"));
        assert!(status.contains("2026-10-16.md"));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_edit_opens_resolved_path() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        fs::write(&config.template, "t").unwrap();

        let (mut out, mut status) = (Vec::new(), Vec::new());
        // `test -f <path>` only succeeds if handed the created entry
        run(&config, options(false, false), &editor("test -f"), &mut out, &mut status).unwrap();

        assert!(out.is_empty());
        assert!(dir.path().join("2026/10/2026-10-16.md").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_run_edit_failure() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        write_entry(dir.path(), date(2026, 10, 16), "notes");

        let (mut out, mut status) = (Vec::new(), Vec::new());
        let err = run(&config, options(false, false), &editor("false"), &mut out, &mut status)
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<JournalError>(),
            Some(JournalError::EditorFailed { .. })
        ));
        assert!(out.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_run_yesterday_edit() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        write_entry(dir.path(), date(2026, 10, 15), "thursday");

        let (mut out, mut status) = (Vec::new(), Vec::new());
        run(&config, options(true, false), &editor("test -f"), &mut out, &mut status).unwrap();

        assert!(out.is_empty());
    }

    #[test]
    fn test_run_yesterday_no_notice_for_previous_day() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        write_entry(dir.path(), date(2026, 10, 15), "thursday\n");

        let (mut out, mut status) = (Vec::new(), Vec::new());
        run(&config, options(true, true), &editor("vi"), &mut out, &mut status).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "thursday\n");
        assert!(status.is_empty());
    }

    #[test]
    fn test_run_yesterday_notice_for_older_entry() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        write_entry(dir.path(), date(2026, 10, 12), "monday\n");

        let (mut out, mut status) = (Vec::new(), Vec::new());
        run(&config, options(true, true), &editor("vi"), &mut out, &mut status).unwrap();

        let out = String::from_utf8(out).unwrap();
        let status = String::from_utf8(status).unwrap();
        assert_eq!(out, "monday\n");
        assert!(status.contains("Most recent entry is from 2026-10-12"));
        assert!(!out.contains("Most recent"));
    }

    #[test]
    fn test_run_yesterday_nothing_found() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());

        let (mut out, mut status) = (Vec::new(), Vec::new());
        let err = run(&config, options(true, true), &editor("vi"), &mut out, &mut status)
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<JournalError>(),
            Some(JournalError::NoEntryInWindow { .. })
        ));
        assert!(out.is_empty());
    }
}
