//! Binary entry point: resolve file locations, start logging, make sure the
//! `customers` table exists, then hand the form to the Ratatui event loop.
use anyhow::{anyhow, Context};
use tracing::{error, info, warn};

use customer_intake::config::AppConfig;
use customer_intake::logging::init_logging;
use customer_intake::{run_app, App, RecordStore};

/// Without the table there is nothing useful to do, so a schema failure ends
/// the program before the terminal is taken over.
fn main() -> anyhow::Result<()> {
    let config = AppConfig::resolve().context("failed to resolve data directory")?;

    if let Err(err) = init_logging(&config.log_path) {
        eprintln!("warning: logging disabled: {err:#}");
    }
    info!(data_dir = %config.data_dir.display(), "starting customer intake");

    let store = RecordStore::new(&config.database_path);
    if let Err(err) = store.initialize() {
        error!(error = %err, "database setup failed");
        return Err(anyhow!("Database Error: An error occurred: {err}"));
    }

    let mut app = App::new(store);
    let result = run_app(&mut app);
    if let Err(err) = &result {
        warn!(error = %err, "terminal session ended with an error");
    }
    info!("customer intake closed");
    result
}
