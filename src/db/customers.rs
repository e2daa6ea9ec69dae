use rusqlite::params;
use tracing::info;

use super::connection::RecordStore;
use super::error::StorageError;
use crate::models::{Customer, NewCustomer};

impl RecordStore {
    /// Insert one validated customer with bound parameters and return the
    /// hydrated row so the caller can report the assigned id.
    pub fn insert(&self, record: &NewCustomer) -> Result<Customer, StorageError> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO customers (name, birthday, email, phone, address, contact_method)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                record.name(),
                record.birthday(),
                record.email(),
                record.phone(),
                record.address(),
                record.contact_method().as_str(),
            ],
        )
        .map_err(StorageError::Insert)?;

        let id = conn.last_insert_rowid();
        info!(id, contact_method = %record.contact_method(), "customer saved");
        Ok(Customer::from_new(id, record))
    }

    /// Number of customers on file, shown in the form header.
    pub fn count(&self) -> Result<i64, StorageError> {
        let conn = self.connect()?;
        conn.query_row("SELECT COUNT(*) FROM customers", [], |row| row.get(0))
            .map_err(StorageError::Query)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::fetch_all;
    use super::*;
    use crate::db::connection::test_support::TempDb;
    use crate::models::ContactMethod;
    use crate::validation::{validate_submission, RawSubmission};

    fn record(name: &str, email: &str, contact_method: ContactMethod) -> NewCustomer {
        validate_submission(RawSubmission {
            name,
            birthday: "",
            email,
            phone: "",
            address: "",
            contact_method,
        })
        .unwrap()
    }

    #[test]
    fn insert_assigns_increasing_ids() {
        let db = TempDb::new();
        let store = db.initialized_store();

        let first = store
            .insert(&record("Ada", "ada@example.com", ContactMethod::Email))
            .unwrap();
        let second = store
            .insert(&record("Grace", "grace@example.com", ContactMethod::Mail))
            .unwrap();

        assert!(second.id > first.id);
        assert_eq!(store.count().unwrap(), 2);

        let rows = fetch_all(&store);
        assert_eq!(rows, vec![first, second]);
    }

    #[test]
    fn values_are_bound_not_interpolated() {
        let db = TempDb::new();
        let store = db.initialized_store();
        let hostile = "Robert'); DROP TABLE customers;--";

        store
            .insert(&record(hostile, "bobby@tables.com", ContactMethod::Phone))
            .unwrap();

        let rows = fetch_all(&store);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, hostile);
        assert_eq!(rows[0].contact_method, ContactMethod::Phone);
    }

    #[test]
    fn insert_without_schema_fails_cleanly() {
        let db = TempDb::new();
        let store = db.store();
        std::fs::create_dir_all(db.path().parent().unwrap()).unwrap();

        let err = store
            .insert(&record("Ada", "ada@example.com", ContactMethod::Email))
            .unwrap_err();
        assert!(matches!(err, StorageError::Insert(_)), "got {err:?}");
    }
}
