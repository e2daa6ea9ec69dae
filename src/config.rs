use std::path::{Path, PathBuf};

use directories::BaseDirs;
use thiserror::Error;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".customer-intake";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "customers.db";
/// Log file written next to the database. The terminal owns stdout, so logs
/// cannot go there.
const LOG_FILE_NAME: &str = "customer-intake.log";

#[derive(Debug, Error)]
#[error("could not locate home directory")]
pub struct HomeDirNotFound;

/// Resolved file locations for one run of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub database_path: PathBuf,
    pub log_path: PathBuf,
}

impl AppConfig {
    /// Resolve the default layout under `~/.customer-intake/`.
    pub fn resolve() -> Result<Self, HomeDirNotFound> {
        let base_dirs = BaseDirs::new().ok_or(HomeDirNotFound)?;
        Ok(Self::in_dir(base_dirs.home_dir().join(DATA_DIR_NAME)))
    }

    /// Lay the database and log out inside an arbitrary directory.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref().to_path_buf();
        Self {
            database_path: data_dir.join(DB_FILE_NAME),
            log_path: data_dir.join(LOG_FILE_NAME),
            data_dir,
        }
    }
}
