//! Picker state: the current query, its results and the selection cursor.
//!
//! This is everything the window needs besides drawing, kept free of any UI
//! framework so it can be driven from tests.

use std::sync::Arc;

use super::database::Database;
use super::ranker::{self, ResultList, RESULT_SLOTS};
use crate::clipboard::ClipboardSink;

/// What happened when the user confirmed a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirm {
    /// The symbol was handed to the clipboard
    Copied(String),
    /// The selected slot was empty; nothing was copied
    EmptySlot,
    /// The clipboard sink failed; the failure has been logged
    CopyFailed,
}

#[derive(Debug, Clone)]
pub struct Picker {
    database: Arc<Database>,
    query: String,
    results: ResultList,
    selected: usize,
}

impl Picker {
    pub fn new(database: Arc<Database>) -> Self {
        Self {
            database,
            query: String::new(),
            results: ResultList::empty(),
            selected: 0,
        }
    }

    /// Replace the query, re-rank, and move the cursor back to the first slot.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.results = ranker::search(&self.database, &self.query);
        self.selected = 0;
        tracing::trace!(query = %self.query, matches = self.results.filled(), "Query updated");
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &ResultList {
        &self.results
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move right, wrapping from the last slot to the first.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % RESULT_SLOTS;
    }

    /// Move left, wrapping from the first slot to the last.
    pub fn select_previous(&mut self) {
        self.selected = (self.selected + RESULT_SLOTS - 1) % RESULT_SLOTS;
    }

    /// The selected symbol, or `None` when the cursor is on an empty slot.
    pub fn selected_symbol(&self) -> Option<&str> {
        self.results.get(self.selected).filter(|s| !s.is_empty())
    }

    /// Copy the selected symbol. Clipboard failures are logged, never raised.
    pub fn confirm(&self, sink: &dyn ClipboardSink) -> Confirm {
        let Some(symbol) = self.selected_symbol() else {
            return Confirm::EmptySlot;
        };

        match sink.copy(symbol) {
            Ok(()) => {
                tracing::debug!(symbol, "Copied to clipboard");
                Confirm::Copied(symbol.to_string())
            }
            Err(e) => {
                tracing::warn!(symbol, "{}", e);
                Confirm::CopyFailed
            }
        }
    }
}
