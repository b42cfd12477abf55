//! Core picker logic - UI-independent.
//!
//! - [`database`] - Flat-file database loading
//! - [`ranker`] - Weighted keyword search
//! - [`picker`] - Query, results and selection state

pub mod database;
pub mod entry;
pub mod picker;
pub mod ranker;

pub use database::{Database, LoadReport};
pub use entry::Entry;
pub use picker::{Confirm, Picker};
pub use ranker::{rank, search, Ranked, ResultList, RESULT_SLOTS};
