//! Interactive menu shown when no flag is given.

use super::{new_entry, review_last, review_today, weekly_summary};
use crate::config::Config;
use crate::errors::AppResult;
use crate::journal_io::JournalStore;
use crate::prompt::Prompter;
use crate::timer::{Clock, Ticker};
use std::io::{BufRead, Write};
use tracing::debug;

const MENU: &str = "\nChoose an option
 1) New entry (intention + grounding timer)
 2) Review last N entries
 3) Today's entries
 4) Weekly summary
 5) Exit";

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Record a new entry.
    NewEntry,
    /// Review the last N entries.
    ReviewLast,
    /// Review today's entries.
    Today,
    /// Show the weekly summary.
    Weekly,
    /// Leave without doing anything.
    Exit,
}

impl MenuChoice {
    /// Maps the user's reply to a choice; anything other than 1-5 is `None`.
    pub fn parse(reply: &str) -> Option<Self> {
        match reply.trim() {
            "1" => Some(MenuChoice::NewEntry),
            "2" => Some(MenuChoice::ReviewLast),
            "3" => Some(MenuChoice::Today),
            "4" => Some(MenuChoice::Weekly),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Shows the menu once and runs the selected operation.
pub fn run_menu<R, W, C>(
    prompter: &mut Prompter<R, W>,
    store: &JournalStore,
    config: &Config,
    clock: &mut C,
) -> AppResult<()>
where
    R: BufRead,
    W: Write,
    C: Ticker + Clock + ?Sized,
{
    writeln!(prompter.output(), "{}", MENU)?;
    let reply = prompter.ask("> ")?;
    let choice = MenuChoice::parse(&reply);
    debug!(reply = %reply, ?choice, "menu selection");

    match choice {
        Some(MenuChoice::NewEntry) => {
            new_entry(prompter, store, config, clock)?;
        }
        Some(MenuChoice::ReviewLast) => review_last(prompter, store)?,
        Some(MenuChoice::Today) => review_today(store, clock.now().date(), prompter.output())?,
        Some(MenuChoice::Weekly) => weekly_summary(store, clock.now().date(), prompter.output())?,
        Some(MenuChoice::Exit) => writeln!(prompter.output(), "\nTake good care today. ✨")?,
        None => writeln!(prompter.output(), "Please choose 1-5.")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::tests::FakeTicker;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 10)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap()
    }

    fn setup() -> (JournalStore, TempDir) {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("journal.csv");
        fs::write(
            &path,
            "timestamp, intention, mood, gratitude\n2024-06-09 08:00,Yesterday,2,\n2024-06-10 08:00,Today,4,Friends\n",
        )
        .unwrap();
        (JournalStore::new(path), temp_dir)
    }

    fn run(input: &str, store: &JournalStore) -> String {
        let mut prompter = Prompter::new(input.as_bytes(), Vec::new());
        let config = Config {
            grounding_secs: 1,
            ..Config::default()
        };
        run_menu(&mut prompter, store, &config, &mut FakeTicker::starting_at(now())).unwrap();
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::NewEntry));
        assert_eq!(MenuChoice::parse(" 4 "), Some(MenuChoice::Weekly));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_menu_shows_options() {
        let (store, _dir) = setup();
        let text = run("5\n", &store);
        assert!(text.contains(" 1) New entry (intention + grounding timer)"));
        assert!(text.contains(" 5) Exit"));
        assert!(text.contains("Take good care today."));
    }

    #[test]
    fn test_menu_invalid_choice() {
        let (store, _dir) = setup();
        let text = run("9\n", &store);
        assert!(text.ends_with("Please choose 1-5.\n"));
    }

    #[test]
    fn test_menu_today() {
        let (store, _dir) = setup();
        let text = run("3\n", &store);
        assert!(text.contains("- Today (2024-06-10) -"));
        assert!(text.contains("intention: Today"));
        assert!(!text.contains("intention: Yesterday"));
    }

    #[test]
    fn test_menu_weekly() {
        let (store, _dir) = setup();
        let text = run("4\n", &store);
        assert!(text.contains("Entries: 2"));
        assert!(text.contains("Average mood: 3.00 (from 2 moods)"));
        assert!(text.contains("2 day(s)"));
    }

    #[test]
    fn test_menu_review_last() {
        let (store, _dir) = setup();
        let text = run("2\n1\n", &store);
        assert!(text.contains("- Last 1 entry -"));
        assert!(text.contains("intention: Today"));
    }

    #[test]
    fn test_menu_new_entry_appends() {
        let (store, _dir) = setup();
        let text = run("1\nStay curious\n5\n\nn\n\n", &store);
        assert!(text.contains("✅ Saved to"));

        let entries = store.load_all().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2].intention, "Stay curious");
        assert_eq!(entries[2].timestamp, "2024-06-10 20:00");
    }
}
