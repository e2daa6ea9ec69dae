use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Default verbosity: informational for dependencies, debug for this crate.
const DEFAULT_DIRECTIVES: &str = "info,customer_intake=debug";

/// Install a plain-text `tracing` subscriber that appends to `log_path`.
///
/// The terminal UI owns stdout, so everything goes to a file. ANSI colouring is
/// off because the output is read with a pager, not a terminal.
pub fn init_logging(log_path: &Path) -> Result<()> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent).context("failed to create log directory")?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(DEFAULT_DIRECTIVES))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("{err}"))
        .context("failed to install tracing subscriber")
}
