use crate::constants::{APP_NAME, FLAG_HELP, FLAG_TODAY, FLAG_WEEKLY};
use clap::Parser;

/// A gentle daily intention, mood and gratitude journal
///
/// The mode is chosen by the first argument after the options (`--today`,
/// `--weekly` or `--help`); anything after it is ignored.
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[clap(name = APP_NAME, about = crate::constants::APP_DESCRIPTION)]
#[clap(long_about = None, disable_help_flag = true, disable_version_flag = true)]
pub struct CliArgs {
    /// Journal file to use instead of GENTLEDAY_FILE or ./journal.csv
    #[clap(short = 'f', long, value_name = "PATH")]
    pub file: Option<String>,

    /// Print verbose output
    #[clap(short = 'v', long)]
    pub verbose: bool,

    /// Mode flag followed by anything else, which is ignored
    #[clap(value_name = "MODE", allow_hyphen_values = true, trailing_var_arg = true)]
    pub rest: Vec<String>,
}

/// What a single run should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Show the interactive menu.
    Interactive,
    /// Print today's entries.
    Today,
    /// Print the weekly summary.
    Weekly,
    /// Print the usage line.
    Help,
    /// The arguments were not understood.
    Unknown,
}

impl Mode {
    /// Modes that only print a fixed message and never read the journal.
    pub fn is_informational(self) -> bool {
        matches!(self, Mode::Help | Mode::Unknown)
    }
}

impl CliArgs {
    /// Parses arguments, mapping anything clap rejects to `Mode::Unknown`
    /// instead of exiting.
    pub fn parse_lenient<I, T>(args: I) -> (Self, Mode)
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        match CliArgs::try_parse_from(args) {
            Ok(args) => {
                let mode = args.mode();
                (args, mode)
            }
            Err(_) => (CliArgs::default(), Mode::Unknown),
        }
    }

    /// The mode selected by the first mode argument.
    pub fn mode(&self) -> Mode {
        match self.rest.first().map(String::as_str) {
            None => Mode::Interactive,
            Some(FLAG_TODAY) => Mode::Today,
            Some(FLAG_WEEKLY) => Mode::Weekly,
            Some(FLAG_HELP) => Mode::Help,
            Some(_) => Mode::Unknown,
        }
    }

    /// Arguments after the mode flag, which play no part in the run.
    pub fn ignored(&self) -> &[String] {
        self.rest.get(1..).unwrap_or_default()
    }
}
