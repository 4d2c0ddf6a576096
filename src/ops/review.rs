//! Review views: recent entries, today's entries and the weekly summary.

use super::{load_entries, write_entry};
use crate::errors::AppResult;
use crate::journal_core::aggregate;
use crate::journal_io::JournalStore;
use crate::prompt::Prompter;
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use tracing::{debug, info};

const NO_ENTRIES: &str = "\n(No entries yet.)";

/// Asks how many entries to show, then lists them most recent first.
pub fn review_last<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    store: &JournalStore,
) -> AppResult<()> {
    let raw = prompter.ask("\nHow many recent entries to show? ")?;
    let n = aggregate::parse_count(&raw);
    debug!(requested = %raw, n, "reviewing recent entries");

    let entries = load_entries(store);
    let out = prompter.output();
    if entries.is_empty() {
        writeln!(out, "{}", NO_ENTRIES)?;
        return Ok(());
    }

    let shown = aggregate::last_n(&entries, n);
    let noun = if shown.len() == 1 { "entry" } else { "entries" };
    writeln!(out, "\n- Last {} {} -", shown.len(), noun)?;
    for entry in shown {
        write_entry(out, entry)?;
    }
    Ok(())
}

/// Lists the entries recorded on `today`, most recent first.
pub fn review_today<W: Write + ?Sized>(
    store: &JournalStore,
    today: NaiveDate,
    out: &mut W,
) -> AppResult<()> {
    let entries = load_entries(store);
    if entries.is_empty() {
        writeln!(out, "{}", NO_ENTRIES)?;
        return Ok(());
    }

    let todays = aggregate::today_entries(&entries, today);
    info!(total = entries.len(), today = todays.len(), "reviewing today");
    if todays.is_empty() {
        writeln!(out, "\n(No entries for today yet.)")?;
        return Ok(());
    }

    writeln!(out, "\n- Today ({}) -", today)?;
    for entry in todays {
        write_entry(out, entry)?;
    }
    Ok(())
}

/// Prints the seven-day summary ending on `today`.
pub fn weekly_summary<W: Write + ?Sized>(
    store: &JournalStore,
    today: NaiveDate,
    out: &mut W,
) -> AppResult<()> {
    let entries = load_entries(store);
    if entries.is_empty() {
        writeln!(out, "{}", NO_ENTRIES)?;
        return Ok(());
    }

    let summary = aggregate::weekly_summary(&entries, today);
    info!(
        count = summary.count,
        moods = summary.mood_count,
        streak = summary.streak,
        "weekly summary"
    );
    writeln!(out, "\n{}", summary)?;
    Ok(())
}
