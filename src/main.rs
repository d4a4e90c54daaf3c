//! daybook: CLI for keeping a dated markdown journal
//!
//! Opens today's entry in your editor (creating it from a template first),
//! or finds the most recent earlier entry with `--yesterday`.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use daybook::config::{Config, MAX_LOOKBACK_DAYS};

mod commands;

#[derive(Parser)]
#[command(name = "daybook")]
#[command(about = "Open or print today's journal entry", long_about = None)]
#[command(version)]
struct Cli {
    /// Use the most recent entry before today instead of today's
    #[arg(short, long)]
    yesterday: bool,

    /// Print the entry instead of opening the editor
    #[arg(short, long)]
    output: bool,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, value_name = "DATE")]
    date: Option<NaiveDate>,

    /// Days to search backward with --yesterday (overrides config)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_LOOKBACK_DAYS)))]
    lookback: Option<u32>,

    /// Show debug logs on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Build the log filter from `RUST_LOG`, defaulting to warn (debug with -v).
/// An invalid `RUST_LOG` is reported rather than ignored.
fn build_filter(verbose: bool, rust_log: Option<&str>) -> Result<EnvFilter> {
    let directive = if verbose { "daybook=debug" } else { "daybook=warn" };
    let default: Directive = directive.parse().context("Invalid default log directive")?;

    EnvFilter::builder()
        .with_default_directive(default)
        .parse(rust_log.unwrap_or_default())
        .with_context(|| format!("Invalid RUST_LOG: {}", rust_log.unwrap_or_default()))
}

fn init_tracing(verbose: bool) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(verbose, rust_log.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let mut config = Config::load()?;
    if let Some(days) = cli.lookback {
        config = config.with_lookback(days)?;
    }

    let today = cli.date.unwrap_or_else(|| Local::now().date_naive());
    tracing::debug!(%today, "today");

    let options = commands::journal::JournalOptions {
        today,
        yesterday: cli.yesterday,
        output: cli.output,
    };
    commands::journal::execute(&config, options)?;

    Ok(())
}
