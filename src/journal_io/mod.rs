//! Journal I/O operations and file management.
//!
//! This module owns the append-only CSV file. Every operation opens the file,
//! does its work and closes it again; nothing is cached between calls, so each
//! read reflects what is on disk.

use crate::constants::CSV_HEADER;
use crate::errors::StoreError;
use crate::journal_core::JournalEntry;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Handle on the journal file at a fixed path.
///
/// # Examples
///
/// ```no_run
/// use gentleday::journal_io::JournalStore;
/// use gentleday::journal_core::{JournalEntry, Mood};
/// use chrono::Local;
///
/// let store = JournalStore::new("journal.csv");
/// store.ensure_initialized()?;
///
/// let entry = JournalEntry::new(Local::now().naive_local(), "Be present", Mood::new(4), "");
/// store.append(&entry)?;
///
/// let entries = store.load_all()?;
/// assert!(!entries.is_empty());
/// # Ok::<(), gentleday::errors::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JournalStore {
    path: PathBuf,
}

impl JournalStore {
    /// Creates a store for the file at `path`. The file is not touched.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JournalStore { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the file with its header line if it does not exist yet.
    ///
    /// Returns `true` when the file was created. An existing file is never
    /// rewritten, whatever its contents.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Create` if the file cannot be created or the header
    /// cannot be written.
    pub fn ensure_initialized(&self) -> Result<bool, StoreError> {
        if self.path.exists() {
            return Ok(false);
        }

        let create_error = |source| StoreError::Create {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .map_err(create_error)?;
        writeln!(file, "{}", CSV_HEADER).map_err(create_error)?;

        debug!(path = %self.path.display(), "created journal file");
        Ok(true)
    }

    /// Appends one entry as a single line.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` if the file cannot be opened for appending or
    /// the line cannot be written. The entry is not retried.
    pub fn append(&self, entry: &JournalEntry) -> Result<(), StoreError> {
        let write_error = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(write_error)?;
        writeln!(file, "{}", entry.encode()).map_err(write_error)?;

        debug!(path = %self.path.display(), timestamp = %entry.timestamp, "appended entry");
        Ok(())
    }

    /// Loads every entry in file order (oldest first).
    ///
    /// The first line is skipped unconditionally as the header. A missing file
    /// reads as an empty journal.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Read` if the file exists but cannot be read, for
    /// example because of permissions or invalid UTF-8.
    pub fn load_all(&self) -> Result<Vec<JournalEntry>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "journal file missing, no entries");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let entries: Vec<JournalEntry> = contents.lines().skip(1).map(JournalEntry::decode).collect();
        debug!(path = %self.path.display(), count = entries.len(), "loaded entries");
        Ok(entries)
    }
}
