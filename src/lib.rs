//! Moji - keyboard-driven emoji picker.
//!
//! Type a few words, get the ten best-matching symbols from a weighted keyword
//! database, move through them with the arrow keys and press Enter to copy.
//!
//! # Architecture
//!
//! - [`config`] - Read-only configuration loading
//! - [`core`] - Database loading, ranking and picker state
//! - [`clipboard`] - Clipboard sinks (external command or native)
//! - [`ui`] - iced frontend (feature `iced-ui`)
//!
//! # Example
//!
//! ```
//! use moji::core::{search, Database, Entry};
//!
//! let db = Database::from_entries(vec![
//!     Entry::new("🐱").with_weight("cat", 5).with_weight("kitten", 2),
//!     Entry::new("🐶").with_weight("dog", 5),
//! ]);
//!
//! let results = search(&db, "Cat");
//! assert_eq!(results.get(0), Some("🐱"));
//! assert_eq!(results.filled(), 1);
//! ```

pub mod clipboard;
pub mod config;
pub mod core;
pub mod logging;
pub mod ui;

mod error;

pub use clipboard::ClipboardSink;
pub use config::Config;
pub use self::core::{Database, Entry, Picker, ResultList};
pub use error::{MojiError, MojiResult};
