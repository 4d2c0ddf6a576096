//! Core journal functionality without I/O operations.
//!
//! This module contains the journal record type, the CSV line codec and the
//! aggregations behind the review views. Nothing here touches the filesystem
//! or reads the clock: callers hand in lines and reference dates.

pub mod aggregate;
pub mod codec;

use crate::constants::{MOOD_MAX, MOOD_MIN, TIMESTAMP_FORMAT};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;
use tracing::trace;

/// A mood rating in the inclusive range 1 to 5.
///
/// # Examples
///
/// ```
/// use gentleday::journal_core::Mood;
///
/// assert_eq!(Mood::parse("3").map(Mood::value), Some(3));
/// assert!(Mood::parse("6").is_none());
/// assert!(Mood::parse("").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Mood(u8);

impl Mood {
    /// Returns a mood if `value` lies within 1..=5.
    pub fn new(value: u8) -> Option<Self> {
        (MOOD_MIN..=MOOD_MAX).contains(&value).then_some(Mood(value))
    }

    /// Parses user or file input leniently.
    ///
    /// Blank, non-numeric and out-of-range input all yield `None`; surrounding
    /// whitespace is ignored.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.parse::<i64>() {
            Ok(n) => u8::try_from(n).ok().and_then(Mood::new).or_else(|| {
                trace!(value = n, "mood out of range, treating as absent");
                None
            }),
            Err(_) => {
                trace!(raw, "non-numeric mood, treating as absent");
                None
            }
        }
    }

    /// The numeric rating.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the journal.
///
/// The timestamp is kept as text so that a row with a malformed timestamp
/// still loads and can be listed; date-based views call [`recorded_at`]
/// and skip rows where it returns `None`.
///
/// [`recorded_at`]: JournalEntry::recorded_at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    /// Local date-time in `YYYY-MM-DD HH:MM` form.
    pub timestamp: String,
    /// Today's intention.
    pub intention: String,
    /// Optional mood rating.
    pub mood: Option<Mood>,
    /// Something the user is grateful for; empty when skipped.
    pub gratitude: String,
}

impl JournalEntry {
    /// Creates an entry stamped with `at`, truncated to the minute.
    ///
    /// # Examples
    ///
    /// ```
    /// use gentleday::journal_core::{JournalEntry, Mood};
    /// use chrono::NaiveDate;
    ///
    /// let at = NaiveDate::from_ymd_opt(2024, 6, 10)
    ///     .unwrap()
    ///     .and_hms_opt(7, 5, 42)
    ///     .unwrap();
    /// let entry = JournalEntry::new(at, "Be patient", Mood::new(4), "Coffee");
    /// assert_eq!(entry.timestamp, "2024-06-10 07:05");
    /// ```
    pub fn new(
        at: NaiveDateTime,
        intention: impl Into<String>,
        mood: Option<Mood>,
        gratitude: impl Into<String>,
    ) -> Self {
        JournalEntry {
            timestamp: format_timestamp(at),
            intention: intention.into(),
            mood,
            gratitude: gratitude.into(),
        }
    }

    /// Builds an entry from the four decoded CSV fields.
    pub fn from_fields(fields: [String; 4]) -> Self {
        let [timestamp, intention, mood, gratitude] = fields;
        JournalEntry {
            timestamp,
            intention,
            mood: Mood::parse(&mood),
            gratitude,
        }
    }

    /// Decodes one data line of the journal file.
    pub fn decode(line: &str) -> Self {
        Self::from_fields(codec::decode(line))
    }

    /// Encodes this entry as one CSV line without the trailing newline.
    pub fn encode(&self) -> String {
        codec::encode(self)
    }

    /// The parsed timestamp, or `None` if the stored text is malformed.
    pub fn recorded_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.timestamp)
    }

    /// The calendar date of the parsed timestamp.
    pub fn date(&self) -> Option<NaiveDate> {
        self.recorded_at().map(|at| at.date())
    }
}

/// Formats a date-time in the journal's timestamp format.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Parses a journal timestamp, returning `None` for anything malformed.
///
/// Only the exact zero-padded form is accepted: chrono alone would also take
/// `2024-6-10 8:05`, which the journal never writes.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    match NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT) {
        Ok(at) if format_timestamp(at) == raw => Some(at),
        Ok(_) => {
            trace!(raw, "timestamp not zero-padded, excluding from date views");
            None
        }
        Err(e) => {
            trace!(raw, error = %e, "unparseable timestamp, excluding from date views");
            None
        }
    }
}
