//! Persistence module split across logical submodules.

mod connection;
mod customers;
mod error;

pub use connection::RecordStore;
pub use error::StorageError;
