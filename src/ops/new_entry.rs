//! The guided new-entry flow.
//!
//! Collects an intention, an optional mood and an optional gratitude note, runs
//! the grounding timer and appends the entry stamped with the time the timer
//! finished.

use super::report_store_error;
use crate::config::Config;
use crate::errors::AppResult;
use crate::journal_core::{JournalEntry, Mood};
use crate::journal_io::JournalStore;
use crate::prompt::Prompter;
use crate::timer::{self, Clock, Ticker};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Runs the new-entry flow and appends the result.
///
/// Returns the saved entry, or `None` if appending failed. A failed append is
/// reported on stderr and not retried. The timestamp is read from `clock`
/// once the countdown has finished.
pub fn new_entry<R, W, C>(
    prompter: &mut Prompter<R, W>,
    store: &JournalStore,
    config: &Config,
    clock: &mut C,
) -> AppResult<Option<JournalEntry>>
where
    R: BufRead,
    W: Write,
    C: Ticker + Clock + ?Sized,
{
    writeln!(prompter.output(), "\n🕯️ New entry")?;
    let intention = prompter.ask("Intention for today (one line): ")?;

    let mood_raw = prompter.ask("Optional: mood 1-5 (press Enter to skip): ")?;
    let mood = Mood::parse(&mood_raw);
    if mood.is_none() && !mood_raw.is_empty() {
        debug!(raw = %mood_raw, "ignoring invalid mood");
    }

    let gratitude = prompter.ask("One thing you're grateful for (optional, Enter to skip): ")?;

    if prompter.ask_yes_no(&format!(
        "Do a {}-breath micro-timer before the {}s timer? (Y/N): ",
        config.breath_count, config.grounding_secs
    ))? {
        timer::micro_breaths(config.breath_count, clock, prompter.output())?;
    }

    writeln!(
        prompter.output(),
        "\n💨 {}-second grounding timer (press Enter to start). . . ",
        config.grounding_secs
    )?;
    prompter.read_line()?;
    timer::countdown(config.grounding_secs, clock, prompter.output())?;

    let entry = JournalEntry::new(clock.now(), intention, mood, gratitude);
    match store.append(&entry) {
        Ok(()) => {
            info!(timestamp = %entry.timestamp, has_mood = entry.mood.is_some(), "entry saved");
            writeln!(prompter.output(), "\n✅ Saved to {}", store.path().display())?;
            Ok(Some(entry))
        }
        Err(e) => {
            report_store_error(&e);
            Ok(None)
        }
    }
}
