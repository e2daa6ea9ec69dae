use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tracing::{debug, info};

use super::error::StorageError;

/// Handle on the customers database. Only the path is kept; every operation
/// opens its own connection and drops it before returning, so nothing is held
/// open while the user is typing.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the data directory and the `customers` table if either is
    /// missing. Safe to call any number of times.
    pub fn initialize(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StorageError::DataDirectory {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = self.connect()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS customers (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                birthday TEXT,
                email TEXT NOT NULL,
                phone TEXT,
                address TEXT,
                contact_method TEXT
            )",
            [],
        )
        .map_err(StorageError::Schema)?;

        info!(path = %self.path.display(), "customers table ready");
        Ok(())
    }

    /// Open a fresh connection. Callers let it drop at the end of their scope.
    pub(crate) fn connect(&self) -> Result<Connection, StorageError> {
        debug!(path = %self.path.display(), "opening SQLite connection");
        Connection::open(&self.path).map_err(|source| StorageError::Open {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    use super::RecordStore;

    /// A database file under the system temp dir, removed on drop.
    pub(crate) struct TempDb {
        dir: PathBuf,
    }

    impl TempDb {
        pub(crate) fn new() -> Self {
            let dir = env::temp_dir().join(format!("customer-intake-{}", uuid::Uuid::new_v4()));
            Self { dir }
        }

        pub(crate) fn path(&self) -> PathBuf {
            self.dir.join("customers.db")
        }

        /// A store pointing at this file, schema not yet created.
        pub(crate) fn store(&self) -> RecordStore {
            RecordStore::new(self.path())
        }

        /// A store with the `customers` table already in place.
        pub(crate) fn initialized_store(&self) -> RecordStore {
            let store = self.store();
            store.initialize().expect("schema should initialize");
            store
        }
    }

    impl Drop for TempDb {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.dir);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::TempDb;
    use super::*;

    fn schema_rows(store: &RecordStore) -> Vec<(String, String)> {
        let conn = store.connect().unwrap();
        let mut stmt = conn
            .prepare("SELECT name, sql FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn initialize_creates_missing_directory_and_table() {
        let db = TempDb::new();
        let store = db.store();
        assert!(!db.path().exists());

        store.initialize().unwrap();

        assert!(db.path().exists());
        let tables = schema_rows(&store);
        assert!(tables.iter().any(|(name, _)| name == "customers"));
    }

    #[test]
    fn initialize_twice_leaves_schema_untouched() {
        let db = TempDb::new();
        let store = db.store();

        store.initialize().unwrap();
        let first = schema_rows(&store);
        store.initialize().unwrap();
        let second = schema_rows(&store);

        assert_eq!(first, second);
        assert_eq!(
            second.iter().filter(|(name, _)| name == "customers").count(),
            1
        );
    }

    #[test]
    fn open_failure_is_reported_as_storage_error() {
        let db = TempDb::new();
        // A directory where the database file should be cannot be opened.
        fs::create_dir_all(db.path()).unwrap();

        let err = db.store().initialize().unwrap_err();
        assert!(
            matches!(err, StorageError::Open { .. } | StorageError::Schema(_)),
            "got {err:?}"
        );
    }
}
