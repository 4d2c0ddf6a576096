//! Constants used throughout the application.
//!
//! This module contains all constants used in the gentleday application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "gentleday";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A gentle daily intention, mood and gratitude journal";
/// One-line usage printed for `--help`.
pub const USAGE_LINE: &str = "Usage: gentleday [--today|--weekly|--help]";
/// First argument selecting the today view.
pub const FLAG_TODAY: &str = "--today";
/// First argument selecting the weekly summary.
pub const FLAG_WEEKLY: &str = "--weekly";
/// First argument selecting the usage line.
pub const FLAG_HELP: &str = "--help";
/// Message printed for any argument the CLI does not understand.
pub const UNKNOWN_OPTION_MESSAGE: &str = "Unknown option. Try --help";

// Logging
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
/// Log level used with `--verbose`.
pub const VERBOSE_LOG_LEVEL: &str = "debug";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";

// Configuration Keys & Environment Variables
/// Environment variable for the journal file path.
pub const ENV_VAR_GENTLEDAY_FILE: &str = "GENTLEDAY_FILE";
/// Environment variable for the grounding countdown length in seconds.
pub const ENV_VAR_GENTLEDAY_TIMER_SECS: &str = "GENTLEDAY_TIMER_SECS";
/// Environment variable for the number of micro-timer breaths.
pub const ENV_VAR_GENTLEDAY_BREATHS: &str = "GENTLEDAY_BREATHS";
/// Environment variable selecting the log output format.
pub const ENV_VAR_GENTLEDAY_LOG_FORMAT: &str = "GENTLEDAY_LOG_FORMAT";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Journal File
/// Default journal file, relative to the working directory.
pub const DEFAULT_JOURNAL_FILE: &str = "journal.csv";
/// Literal first line of every journal file.
pub const CSV_HEADER: &str = "timestamp, intention, mood, gratitude";
/// Number of fields in a journal row.
pub const FIELD_COUNT: usize = 4;

// Date/Time Logic
/// Timestamp format stored in the journal (minute precision, no timezone).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";
/// Days before the reference date included in the weekly window.
pub const WEEKLY_LOOKBACK_DAYS: i64 = 6;

// Mood
/// Lowest accepted mood value.
pub const MOOD_MIN: u8 = 1;
/// Highest accepted mood value.
pub const MOOD_MAX: u8 = 5;

// Review
/// Number of entries shown when the requested count is not a number.
pub const DEFAULT_REVIEW_COUNT: usize = 5;

// Timers
/// Default grounding countdown length in seconds.
pub const DEFAULT_GROUNDING_SECS: u64 = 60;
/// Default number of breaths in the micro-timer.
pub const DEFAULT_BREATH_COUNT: u32 = 3;
/// Breath phases as (label, seconds).
pub const BREATH_PHASES: &[(&str, u64)] = &[("Inhale", 4), ("Hold  ", 2), ("Exhale", 6)];
