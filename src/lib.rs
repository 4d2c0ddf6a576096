/*!
# gentleday

gentleday is a small journaling tool for a daily intention, an optional mood
rating and something to be grateful for. Each entry is recorded after a short
grounding timer and appended to a CSV file that is never rewritten.

## Core Features

- Record a new entry (intention, mood 1-5, gratitude) after a grounding countdown
- Review the last N entries
- Review today's entries
- Weekly summary: entry count, average mood and current daily streak

## Architecture

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `journal_core`: Entry type, CSV codec and aggregations (no I/O)
- `journal_io`: The append-only journal file
- `ops`: The new-entry flow, review views and menu
- `prompt`, `timer`: Terminal prompting and the breathing/grounding timers

## Usage Example

```rust,no_run
use gentleday::journal_core::aggregate;
use gentleday::journal_io::JournalStore;
use chrono::Local;

let store = JournalStore::new("journal.csv");
store.ensure_initialized()?;

let entries = store.load_all()?;
let summary = aggregate::weekly_summary(&entries, Local::now().date_naive());
println!("{}", summary);
# Ok::<(), gentleday::errors::StoreError>(())
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Constants used across the application
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Journal entry model, CSV codec and aggregations
pub mod journal_core;
/// The append-only journal file
pub mod journal_io;
/// Tracing subscriber setup
pub mod logging;
/// User-facing operations
pub mod ops;
/// Line-oriented terminal prompting
pub mod prompt;
/// Grounding and breathing timers
pub mod timer;

// Re-export important types for convenience
pub use cli::{CliArgs, Mode};
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use journal_core::{JournalEntry, Mood};
pub use journal_io::JournalStore;
