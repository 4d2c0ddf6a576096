//! Configuration management for the gentleday application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `GENTLEDAY_FILE`: Path to the journal file (defaults to `journal.csv` in the
//!   working directory). `~` and `$VAR` references are expanded.
//! - `GENTLEDAY_TIMER_SECS`: Length of the grounding countdown (defaults to 60)
//! - `GENTLEDAY_BREATHS`: Breaths in the optional micro-timer (defaults to 3)
//! - `GENTLEDAY_LOG_FORMAT`: `text` or `json` log output (defaults to `text`)

use crate::constants::{
    DEFAULT_BREATH_COUNT, DEFAULT_GROUNDING_SECS, DEFAULT_JOURNAL_FILE,
    ENV_VAR_GENTLEDAY_BREATHS, ENV_VAR_GENTLEDAY_FILE, ENV_VAR_GENTLEDAY_LOG_FORMAT,
    ENV_VAR_GENTLEDAY_TIMER_SECS, LOG_FORMAT_JSON, LOG_FORMAT_TEXT, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Output format of the diagnostic log on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            LOG_FORMAT_TEXT => Ok(LogFormat::Text),
            LOG_FORMAT_JSON => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "Unknown log format '{}'. Expected '{}' or '{}'",
                other, LOG_FORMAT_TEXT, LOG_FORMAT_JSON
            ))),
        }
    }
}

/// Configuration for the gentleday application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use gentleday::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     journal_file: PathBuf::from("/tmp/journal.csv"),
///     grounding_secs: 30,
///     ..Config::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// The append-only journal file.
    pub journal_file: PathBuf,

    /// Seconds of the grounding countdown before an entry is saved.
    pub grounding_secs: u64,

    /// Breaths in the optional micro-timer.
    pub breath_count: u32,

    /// Format of the diagnostic log.
    pub log_format: LogFormat,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("journal_file", &REDACTED_PLACEHOLDER)
            .field("grounding_secs", &self.grounding_secs)
            .field("breath_count", &self.breath_count)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            journal_file: PathBuf::from(DEFAULT_JOURNAL_FILE),
            grounding_secs: DEFAULT_GROUNDING_SECS,
            breath_count: DEFAULT_BREATH_COUNT,
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The journal file path expansion fails
    /// - A timer variable is not a positive integer
    /// - The log format is neither `text` nor `json`
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use gentleday::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Timer length: {}s", config.grounding_secs),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        let journal_file = match env::var(ENV_VAR_GENTLEDAY_FILE) {
            Ok(raw) => Self::expand_path(&raw)?,
            Err(_) => PathBuf::from(DEFAULT_JOURNAL_FILE),
        };

        let grounding_secs =
            Self::positive_from_env(ENV_VAR_GENTLEDAY_TIMER_SECS, DEFAULT_GROUNDING_SECS)?;
        let breath_count = Self::positive_from_env(ENV_VAR_GENTLEDAY_BREATHS, DEFAULT_BREATH_COUNT)?;

        let log_format = match env::var(ENV_VAR_GENTLEDAY_LOG_FORMAT) {
            Ok(raw) => raw.parse()?,
            Err(_) => LogFormat::default(),
        };

        Ok(Config {
            journal_file,
            grounding_secs,
            breath_count,
            log_format,
        })
    }

    /// Replaces the journal file, expanding `~` and environment variables.
    pub fn with_journal_file(mut self, raw: &str) -> AppResult<Self> {
        self.journal_file = Self::expand_path(raw)?;
        Ok(self)
    }

    fn expand_path(raw: &str) -> AppResult<PathBuf> {
        let expanded = shellexpand::full(raw)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
        Ok(PathBuf::from(expanded.into_owned()))
    }

    fn positive_from_env<T>(var: &str, default: T) -> AppResult<T>
    where
        T: FromStr + PartialOrd + Default,
    {
        let Ok(raw) = env::var(var) else {
            return Ok(default);
        };
        match raw.trim().parse::<T>() {
            Ok(value) if value > T::default() => Ok(value),
            _ => Err(AppError::Config(format!(
                "{} must be a positive integer, got '{}'",
                var, raw
            ))),
        }
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with one of the following messages:
    /// - "Journal file path is empty"
    /// - "Journal file path is a directory"
    /// - "Grounding timer must be at least one second"
    /// - "Micro-timer needs at least one breath"
    pub fn validate(&self) -> AppResult<()> {
        if self.journal_file.as_os_str().is_empty() {
            return Err(AppError::Config("Journal file path is empty".to_string()));
        }

        if self.journal_file.is_dir() {
            return Err(AppError::Config(format!(
                "Journal file path is a directory: {}",
                self.journal_file.display()
            )));
        }

        if self.grounding_secs == 0 {
            return Err(AppError::Config(
                "Grounding timer must be at least one second".to_string(),
            ));
        }

        if self.breath_count == 0 {
            return Err(AppError::Config(
                "Micro-timer needs at least one breath".to_string(),
            ));
        }

        Ok(())
    }

    /// The journal file path.
    pub fn journal_file(&self) -> &Path {
        &self.journal_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn setup() {
        env::remove_var(ENV_VAR_GENTLEDAY_FILE);
        env::remove_var(ENV_VAR_GENTLEDAY_TIMER_SECS);
        env::remove_var(ENV_VAR_GENTLEDAY_BREATHS);
        env::remove_var(ENV_VAR_GENTLEDAY_LOG_FORMAT);
    }

    #[test]
    fn test_debug_impl_redacts_path() {
        let config = Config {
            journal_file: PathBuf::from("/home/username/private/journal.csv"),
            ..Config::default()
        };

        let debug_output = format!("{:?}", config);

        assert!(debug_output.contains(REDACTED_PLACEHOLDER));
        assert!(!debug_output.contains("/home/username/private"));
        assert!(debug_output.contains("grounding_secs: 60"));
    }

    #[test]
    #[serial]
    fn test_load_defaults() {
        setup();

        let config = Config::load().unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.journal_file, PathBuf::from("journal.csv"));
        assert_eq!(config.grounding_secs, 60);
        assert_eq!(config.breath_count, 3);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    #[serial]
    fn test_load_from_env() {
        setup();
        let temp_dir = tempdir().unwrap();
        let file = temp_dir.path().join("mine.csv");

        env::set_var(ENV_VAR_GENTLEDAY_FILE, &file);
        env::set_var(ENV_VAR_GENTLEDAY_TIMER_SECS, "5");
        env::set_var(ENV_VAR_GENTLEDAY_BREATHS, "1");
        env::set_var(ENV_VAR_GENTLEDAY_LOG_FORMAT, "JSON");
        let config = Config::load();
        setup();

        let config = config.unwrap();
        assert_eq!(config.journal_file, file);
        assert_eq!(config.grounding_secs, 5);
        assert_eq!(config.breath_count, 1);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    #[serial]
    fn test_load_expands_env_vars_in_path() {
        setup();
        env::set_var("GENTLEDAY_TEST_ROOT", "/var/tmp");
        env::set_var(ENV_VAR_GENTLEDAY_FILE, "$GENTLEDAY_TEST_ROOT/journal.csv");
        let config = Config::load();
        env::remove_var("GENTLEDAY_TEST_ROOT");
        setup();

        assert_eq!(config.unwrap().journal_file, PathBuf::from("/var/tmp/journal.csv"));
    }

    #[test]
    #[serial]
    fn test_load_rejects_bad_timer() {
        setup();
        for bad in ["0", "-3", "soon"] {
            env::set_var(ENV_VAR_GENTLEDAY_TIMER_SECS, bad);
            let result = Config::load();
            match result {
                Err(AppError::Config(message)) => {
                    assert!(message.contains(ENV_VAR_GENTLEDAY_TIMER_SECS));
                    assert!(message.contains(bad));
                }
                other => panic!("Expected Config error for {:?}, got {:?}", bad, other),
            }
        }
        setup();
    }

    #[test]
    #[serial]
    fn test_load_rejects_unknown_log_format() {
        setup();
        env::set_var(ENV_VAR_GENTLEDAY_LOG_FORMAT, "yaml");
        let result = Config::load();
        setup();

        assert!(matches!(result, Err(AppError::Config(m)) if m.contains("yaml")));
    }

    #[test]
    #[serial]
    fn test_load_rejects_undefined_variable_in_path() {
        setup();
        env::remove_var("GENTLEDAY_SURELY_UNSET");
        env::set_var(ENV_VAR_GENTLEDAY_FILE, "$GENTLEDAY_SURELY_UNSET/journal.csv");
        let result = Config::load();
        setup();

        assert!(matches!(result, Err(AppError::Config(m)) if m.contains("Failed to expand path")));
    }

    #[test]
    fn test_with_journal_file_overrides_path() {
        let config = Config::default().with_journal_file("/tmp/other.csv").unwrap();
        assert_eq!(config.journal_file(), Path::new("/tmp/other.csv"));
    }

    #[test]
    fn test_validate_valid_config() {
        let temp_dir = tempdir().unwrap();
        let config = Config {
            journal_file: temp_dir.path().join("journal.csv"),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_path() {
        let config = Config {
            journal_file: PathBuf::from(""),
            ..Config::default()
        };
        match config.validate() {
            Err(AppError::Config(message)) => assert!(message.contains("path is empty")),
            _ => panic!("Expected Config error about empty path"),
        }
    }

    #[test]
    fn test_validate_directory_path() {
        let temp_dir = tempdir().unwrap();
        let config = Config {
            journal_file: temp_dir.path().to_path_buf(),
            ..Config::default()
        };
        match config.validate() {
            Err(AppError::Config(message)) => assert!(message.contains("is a directory")),
            _ => panic!("Expected Config error about directory path"),
        }
    }

    #[test]
    fn test_validate_zero_timers() {
        let config = Config {
            grounding_secs: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            breath_count: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
