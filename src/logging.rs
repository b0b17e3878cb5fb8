//! Tracing setup. Events go to a log file because the terminal belongs to
//! the UI while the app is running.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::Config;

/// Build the filter, falling back to `info` on an unparsable directive
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `config.log_file`
pub fn init(config: &Config) -> anyhow::Result<()> {
    let file = open_log_file(&config.log_file)?;

    tracing_subscriber::registry()
        .with(build_filter(&config.log_level))
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_target(true)
                .with_ansi(false),
        )
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!(
        version = crate::cli::VERSION,
        api_url = %config.api_url,
        "logging initialized"
    );
    Ok(())
}

fn open_log_file(path: &Path) -> anyhow::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
