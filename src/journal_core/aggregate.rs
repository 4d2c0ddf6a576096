//! Aggregations behind the review views.
//!
//! Every function takes the loaded entries in file order (oldest first) plus an
//! explicit reference date, so results never depend on the wall clock.

use super::JournalEntry;
use crate::constants::{DEFAULT_REVIEW_COUNT, WEEKLY_LOOKBACK_DAYS};
use chrono::{Duration, NaiveDate};
use std::collections::HashSet;
use std::fmt;

/// Interprets the user's answer to "how many entries?".
///
/// Numbers are clamped to at least 1; anything that is not a number falls back
/// to the default of 5.
///
/// # Examples
///
/// ```
/// use gentleday::journal_core::aggregate::parse_count;
///
/// assert_eq!(parse_count("12"), 12);
/// assert_eq!(parse_count("0"), 1);
/// assert_eq!(parse_count("lots"), 5);
/// ```
pub fn parse_count(raw: &str) -> usize {
    match raw.trim().parse::<i64>() {
        Ok(n) if n < 1 => 1,
        Ok(n) => usize::try_from(n).unwrap_or(usize::MAX),
        Err(_) => DEFAULT_REVIEW_COUNT,
    }
}

/// The last `n` entries, most recent first. `n` is treated as at least 1.
pub fn last_n(entries: &[JournalEntry], n: usize) -> Vec<&JournalEntry> {
    let n = n.max(1);
    entries.iter().rev().take(n).collect()
}

/// Entries stamped on `today`, most recent first.
///
/// Entries with an unparseable timestamp are skipped.
pub fn today_entries(entries: &[JournalEntry], today: NaiveDate) -> Vec<&JournalEntry> {
    entries
        .iter()
        .rev()
        .filter(|entry| entry.date() == Some(today))
        .collect()
}

/// Counts, mood average and streak over the seven days ending on a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySummary {
    /// First day of the window (inclusive).
    pub start: NaiveDate,
    /// Last day of the window (inclusive), the reference date.
    pub end: NaiveDate,
    /// Entries with a parseable timestamp inside the window.
    pub count: usize,
    /// Sum of the valid moods among counted entries.
    pub mood_total: u32,
    /// Number of counted entries carrying a valid mood.
    pub mood_count: u32,
    /// Consecutive days with an entry, walking back from `end`.
    pub streak: u32,
}

impl WeeklySummary {
    /// Mean mood, or `None` when no moods were logged in the window.
    pub fn average_mood(&self) -> Option<f64> {
        (self.mood_count > 0).then(|| f64::from(self.mood_total) / f64::from(self.mood_count))
    }

    /// Average mood with two decimals, or `"no moods logged"`.
    pub fn average_mood_label(&self) -> String {
        match self.average_mood() {
            Some(avg) => format!("{:.2}", avg),
            None => "no moods logged".to_string(),
        }
    }

    /// Streak as `"N day(s)"`, or `"-"` when there is no entry today.
    pub fn streak_label(&self) -> String {
        if self.streak > 0 {
            format!("{} day(s)", self.streak)
        } else {
            "-".to_string()
        }
    }
}

impl fmt::Display for WeeklySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Weekly Summary ({} to {}) -", self.start, self.end)?;
        writeln!(f, "Entries: {}", self.count)?;
        match self.average_mood() {
            Some(_) => writeln!(
                f,
                "Average mood: {} (from {} moods)",
                self.average_mood_label(),
                self.mood_count
            )?,
            None => writeln!(f, "Average mood: - ({})", self.average_mood_label())?,
        }
        write!(f, "Current daily streak (ending today): {}", self.streak_label())
    }
}

/// Summarizes the window `[today - 6 days, today]`.
///
/// # Examples
///
/// ```
/// use gentleday::journal_core::aggregate::weekly_summary;
/// use gentleday::journal_core::JournalEntry;
/// use chrono::NaiveDate;
///
/// let entries = vec![
///     JournalEntry::decode("2024-06-09 08:00,Rest,2,"),
///     JournalEntry::decode("2024-06-10 08:00,Run,4,"),
/// ];
/// let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
/// let summary = weekly_summary(&entries, today);
///
/// assert_eq!(summary.count, 2);
/// assert_eq!(summary.average_mood_label(), "3.00");
/// assert_eq!(summary.streak, 2);
/// ```
pub fn weekly_summary(entries: &[JournalEntry], today: NaiveDate) -> WeeklySummary {
    let start = today - Duration::days(WEEKLY_LOOKBACK_DAYS);
    let mut count = 0;
    let mut mood_total = 0;
    let mut mood_count = 0;
    let mut days_with_entries = HashSet::new();

    for (date, entry) in entries.iter().filter_map(|e| e.date().map(|d| (d, e))) {
        if date < start || date > today {
            continue;
        }
        count += 1;
        days_with_entries.insert(date);
        if let Some(mood) = entry.mood {
            mood_total += u32::from(mood.value());
            mood_count += 1;
        }
    }

    let mut streak = 0;
    let mut day = today;
    while days_with_entries.contains(&day) {
        streak += 1;
        day -= Duration::days(1);
    }

    WeeklySummary {
        start,
        end: today,
        count,
        mood_total,
        mood_count,
        streak,
    }
}
