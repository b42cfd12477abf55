//! Flat-file emoji database.
//!
//! The database is a plain text file with one entry per line:
//!
//! ```text
//! 🐱;cat:5;kitten:2;pet:1
//! ```
//!
//! The first `;`-separated segment is the symbol, every later segment is a
//! `term:weight` pair. Segments without a `:` are ignored. Lines whose weight
//! does not parse are skipped and reported instead of aborting the load, so a
//! single typo in the file cannot take the whole picker down.

use std::fs;
use std::path::{Path, PathBuf};

use super::entry::Entry;
use crate::error::{MojiError, MojiResult};

/// File name looked up next to the executable.
pub const DATABASE_FILE: &str = "emojis.txt";

/// Lines that were dropped while parsing a database.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// One `MojiError::MalformedLine` per skipped line, in file order.
    pub skipped: Vec<MojiError>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Read-only collection of entries, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct Database {
    entries: Vec<Entry>,
}

impl Database {
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Default database location: `emojis.txt` in the directory of the running
    /// executable, not the current working directory.
    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DATABASE_FILE)
    }

    /// Load a database file, falling back to an empty database when the file
    /// is missing or unreadable. Skipped lines are logged as warnings.
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok((database, report)) => {
                for problem in &report.skipped {
                    tracing::warn!(path = %path.display(), "{}", problem);
                }
                tracing::info!(
                    path = %path.display(),
                    entries = database.len(),
                    skipped = report.skipped.len(),
                    "Loaded emoji database"
                );
                database
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "Failed to read emoji database: {}", e);
                Self::default()
            }
        }
    }

    /// Read and parse a database file, surfacing IO errors to the caller.
    pub fn read(path: &Path) -> MojiResult<(Self, LoadReport)> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Parse database text. Never fails: bad lines end up in the report.
    pub fn parse(text: &str) -> (Self, LoadReport) {
        let mut entries = Vec::new();
        let mut report = LoadReport::default();

        for (idx, line) in text.lines().enumerate() {
            // lines() leaves a lone '\r' on a final line without '\n'
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.trim().is_empty() {
                continue;
            }

            match parse_line(line, idx + 1) {
                Ok(entry) => entries.push(entry),
                Err(e) => report.skipped.push(e),
            }
        }

        (Self { entries }, report)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse one non-empty line. `line_no` is 1-based and only used for errors.
fn parse_line(line: &str, line_no: usize) -> MojiResult<Entry> {
    let mut segments = line.split(';');

    let symbol = segments.next().unwrap_or_default();
    if symbol.is_empty() {
        return Err(MojiError::MalformedLine {
            line: line_no,
            reason: "missing symbol".to_string(),
        });
    }

    let mut entry = Entry::new(symbol);
    for segment in segments {
        let Some((term, weight)) = segment.split_once(':') else {
            continue;
        };

        let weight = weight
            .trim()
            .parse::<i64>()
            .map_err(|e| MojiError::MalformedLine {
                line: line_no,
                reason: format!("invalid weight {:?} for term {:?}: {}", weight, term, e),
            })?;

        entry.insert_weight(term.to_string(), weight);
    }

    Ok(entry)
}
