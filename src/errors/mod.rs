//! Error handling utilities for the gentleday application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Parse anomalies in the journal (an unreadable timestamp, an out-of-range mood)
//! are deliberately absent here: they degrade to "excluded" or "absent" at the
//! point of parsing and never surface as errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents the failure modes of the append-only journal file.
///
/// Each variant carries the path of the journal file and the underlying I/O
/// error. None of them is fatal: the operations layer reports them and the run
/// continues.
///
/// # Examples
///
/// ```
/// use gentleday::errors::StoreError;
/// use std::io::{self, ErrorKind};
/// use std::path::PathBuf;
///
/// let error = StoreError::Write {
///     path: PathBuf::from("journal.csv"),
///     source: io::Error::new(ErrorKind::PermissionDenied, "permission denied"),
/// };
///
/// assert!(format!("{}", error).contains("Write failed"));
/// assert!(format!("{}", error).contains("permission denied"));
/// ```
#[derive(Debug, Error)]
pub enum StoreError {
    /// The journal file could not be created or its header could not be written.
    #[error("Could not create {path}: {source}")]
    Create {
        /// The journal file path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An entry could not be appended to the journal file.
    #[error("Write failed: {source}")]
    Write {
        /// The journal file path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The journal file exists but could not be read.
    #[error("Read failed: {source}")]
    Read {
        /// The journal file path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Path of the journal file involved in the failure.
    pub fn path(&self) -> &PathBuf {
        match self {
            StoreError::Create { path, .. }
            | StoreError::Write { path, .. }
            | StoreError::Read { path, .. } => path,
        }
    }
}

/// Represents all possible errors that can occur in the gentleday application.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use gentleday::errors::AppError;
///
/// let error = AppError::Config("Journal file path is empty".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Journal file path is empty");
/// ```
///
/// Converting from an IO error:
/// ```
/// use gentleday::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::UnexpectedEof, "stdin closed");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::UnexpectedEof),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors on the terminal (prompt reads, output writes).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;
