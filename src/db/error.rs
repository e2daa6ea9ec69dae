use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between the form and the SQLite file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create data directory {path}: {source}")]
    DataDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open SQLite database {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to create customers table: {0}")]
    Schema(#[source] rusqlite::Error),

    #[error("failed to insert customer: {0}")]
    Insert(#[source] rusqlite::Error),

    #[error("failed to query customers: {0}")]
    Query(#[source] rusqlite::Error),
}
