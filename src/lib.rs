//! Core library surface for the customer intake form.
//!
//! The binary wires these pieces together; keeping them in a library lets the
//! form and the store be exercised without a terminal.
pub mod config;
pub mod db;
pub mod form;
pub mod logging;
pub mod models;
pub mod ui;
pub mod validation;

/// Persistence entry points used by `main.rs`.
pub use db::{RecordStore, StorageError};

/// Domain types passed between the form and the store.
pub use models::{ContactMethod, Customer, NewCustomer};

/// The form controller and the notices it produces.
pub use form::{CustomerForm, FormField, Notice, NoticeLevel};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
