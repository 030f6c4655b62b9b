//! Error types for teamroute-core

use crate::mapping::parser::LineError;
use std::fmt;
use std::path::PathBuf;

/// Result type alias for teamroute operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for teamroute operations
#[derive(Debug)]
pub enum Error {
    /// Missing or invalid input (unset environment variable, empty argument)
    Config(String),

    /// I/O error
    Io(std::io::Error),

    /// Mapping file does not exist
    MappingNotFound(PathBuf),

    /// Mapping line that is not `team:channel`
    MalformedLine {
        /// 1-based line number in the mapping file
        line: usize,
        /// Why the line was rejected
        reason: LineError,
    },

    /// Failure writing a log record or a GitHub Actions output
    Output(String),

    /// JSON serialization error
    Json(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::MappingNotFound(path) => {
                write!(f, "Mapping file not found: {}", path.display())
            }
            Error::MalformedLine { line, reason } => {
                write!(f, "Malformed mapping line {}: {}", line, reason)
            }
            Error::Output(msg) => write!(f, "Output error: {}", msg),
            Error::Json(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

// Display already carries the underlying cause, so no source() chain
impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

/// Fieldless error category for zero-cost pattern matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorKind {
    /// Configuration error
    Config,
    /// I/O operation error
    Io,
    /// Mapping file missing
    MappingNotFound,
    /// Malformed mapping line
    MalformedLine,
    /// Output error
    Output,
    /// JSON error
    Json,
}

impl Error {
    /// Get the error kind — zero allocation, returns a Copy enum.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::Config(_) => ErrorKind::Config,
            Error::Io(_) => ErrorKind::Io,
            Error::MappingNotFound(_) => ErrorKind::MappingNotFound,
            Error::MalformedLine { .. } => ErrorKind::MalformedLine,
            Error::Output(_) => ErrorKind::Output,
            Error::Json(_) => ErrorKind::Json,
        }
    }

    /// Borrow the error message — zero allocation.
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Error::Config(msg) | Error::Output(msg) | Error::Json(msg) => msg,
            Error::Io(_) => "I/O error",
            Error::MappingNotFound(_) => "mapping file not found",
            Error::MalformedLine { .. } => "malformed mapping line",
        }
    }

    /// Shorthand for a missing required input
    pub(crate) fn missing(name: &str) -> Self {
        Error::Config(format!("{} not set", name))
    }
}
