/*!
# gentleday

Entry point: parse flags, load configuration, make sure the journal file
exists, then run exactly one operation.

## Usage

```
gentleday [-v] [-f PATH] [--today|--weekly|--help]
```

With no flag an interactive menu is shown. Unknown arguments print a short
hint and exit normally; arguments after the mode flag are ignored.
*/

use gentleday::cli::{CliArgs, Mode};
use gentleday::config::Config;
use gentleday::constants::{TRACING_ROOT_SPAN_NAME, UNKNOWN_OPTION_MESSAGE, USAGE_LINE};
use gentleday::errors::AppResult;
use gentleday::journal_io::JournalStore;
use gentleday::logging;
use gentleday::ops;
use gentleday::prompt::Prompter;
use gentleday::timer::{Clock, SystemClock};
use std::io;
use tracing::{debug, info, info_span};

/// Loads the environment configuration and applies the `--file` override.
fn load_config(args: &CliArgs) -> AppResult<Config> {
    let mut config = Config::load()?;
    if let Some(file) = args.file.as_deref() {
        config = config.with_journal_file(file)?;
    }
    config.validate()?;
    Ok(config)
}

fn print_message(mode: Mode) {
    match mode {
        Mode::Help => println!("{}", USAGE_LINE),
        _ => println!("{}", UNKNOWN_OPTION_MESSAGE),
    }
}

fn main() -> AppResult<()> {
    let (args, mode) = CliArgs::parse_lenient(std::env::args_os());

    let config = load_config(&args);
    let log_format = config
        .as_ref()
        .map(|config| config.log_format)
        .unwrap_or_default();
    logging::init(log_format, args.verbose);

    let span = info_span!(TRACING_ROOT_SPAN_NAME, ?mode);
    let _guard = span.enter();
    debug!(?args, "parsed arguments");
    if !args.ignored().is_empty() {
        debug!(ignored = ?args.ignored(), "ignoring arguments after the mode flag");
    }

    // Help and the unknown-option hint never fail on a bad environment.
    let config = match config {
        Ok(config) => config,
        Err(e) if mode.is_informational() => {
            debug!(error = %e, "configuration unusable, skipping journal setup");
            print_message(mode);
            return Ok(());
        }
        Err(e) => return Err(e),
    };
    debug!(?config, "configuration loaded");

    let store = JournalStore::new(config.journal_file());
    if let Err(e) = store.ensure_initialized() {
        ops::report_store_error(&e);
    }

    let mut clock = SystemClock;
    match mode {
        Mode::Help | Mode::Unknown => print_message(mode),
        Mode::Today => ops::review_today(&store, clock.now().date(), &mut io::stdout().lock())?,
        Mode::Weekly => ops::weekly_summary(&store, clock.now().date(), &mut io::stdout().lock())?,
        Mode::Interactive => {
            let mut prompter = Prompter::stdio();
            ops::run_menu(&mut prompter, &store, &config, &mut clock)?;
        }
    }

    info!("done");
    Ok(())
}
