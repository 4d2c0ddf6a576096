//! User-facing operations.
//!
//! Each operation is one linear run against the journal file: record a new
//! entry, or render one of the review views. Journal file failures are reported
//! here, at the boundary, and never abort the run.

pub mod menu;
pub mod new_entry;
pub mod review;

pub use menu::run_menu;
pub use new_entry::new_entry;
pub use review::{review_last, review_today, weekly_summary};

use crate::errors::StoreError;
use crate::journal_core::JournalEntry;
use crate::journal_io::JournalStore;
use std::io::{self, Write};
use tracing::debug;

/// Placeholder shown for a missing mood or gratitude.
const EMPTY_FIELD: &str = "—";

/// Reports a journal file failure on stderr and in the log.
pub fn report_store_error(error: &StoreError) {
    debug!(path = %error.path().display(), error = ?error, "journal file operation failed");
    eprintln!("{}", error);
}

/// Loads all entries, reporting a read failure and treating it as no entries.
pub fn load_entries(store: &JournalStore) -> Vec<JournalEntry> {
    store.load_all().unwrap_or_else(|e| {
        report_store_error(&e);
        Vec::new()
    })
}

/// Renders one entry as a bullet with its fields indented below.
pub fn write_entry<W: Write + ?Sized>(out: &mut W, entry: &JournalEntry) -> io::Result<()> {
    let mood = entry
        .mood
        .map(|m| m.to_string())
        .unwrap_or_else(|| EMPTY_FIELD.to_string());
    let gratitude = if entry.gratitude.trim().is_empty() {
        EMPTY_FIELD
    } else {
        entry.gratitude.as_str()
    };

    writeln!(out, "• {}", entry.timestamp)?;
    writeln!(out, "   intention: {}", entry.intention)?;
    writeln!(out, "   mood: {}   gratitude: {}", mood, gratitude)
}
