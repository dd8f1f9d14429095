//! Bloglist Stats - command-line reporter for blog collection statistics.
//!
//! # Usage
//!
//! ```bash
//! # Everything, as JSON
//! bloglist-stats --input blogs.json
//!
//! # One statistic over a directory of JSONL exports
//! bloglist-stats --input ./exports/ --stat most-likes --format text
//!
//! # Fail on the first invalid record
//! bloglist-stats --input blogs.jsonl --strict
//! ```

use std::path::PathBuf;

use anyhow::Context;
use bloglist_core::BlogSource;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use bloglist_stats::{Config, OutputFormat, StatSelection, render};

/// Aggregate statistics for an exported blog collection.
#[derive(Parser, Debug)]
#[command(name = "bloglist-stats")]
#[command(about = "Report likes and top authors for a blog collection", long_about = None)]
struct Args {
    /// Path to .env file (optional).
    #[arg(long, env = "DOTENV_PATH", default_value = ".env")]
    dotenv: String,

    /// Blog export file or directory (overrides BLOGLIST_INPUT).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output format (overrides BLOGLIST_FORMAT).
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Statistic to report.
    #[arg(short, long, value_enum, default_value_t = StatSelection::All)]
    stat: StatSelection,

    /// Fail on the first invalid record instead of skipping it.
    #[arg(long)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load .env file if it exists
    if std::path::Path::new(&args.dotenv).exists() {
        dotenvy::from_path(&args.dotenv)?;
        eprintln!("Loaded environment from {}", args.dotenv);
    }

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration, then apply flag overrides
    let config = Config::from_env()?.with_overrides(args.input, args.format, args.strict);

    let source = BlogSource::new(config.source_config()?);
    let loaded = source
        .load()
        .with_context(|| format!("failed to load blogs from {}", source.config().input.display()))?;

    let output = render(&loaded, args.stat, config.format)?;
    println!("{output}");

    tracing::info!(stat = ?args.stat, blogs = loaded.blogs.len(), "report written");

    Ok(())
}
