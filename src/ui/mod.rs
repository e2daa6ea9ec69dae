//! Ratatui front end: a single full-screen form with a modal notice layer.

mod app;
mod helpers;
mod terminal;

pub use app::{App, WINDOW_TITLE};
pub use terminal::run_app;
