//! Timestamped team extractor log record

use chrono::NaiveDateTime;

/// `strftime` layout of the timestamp in record file names, second precision
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// One log record: a single line written to `<short_name>_<timestamp>.txt`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    short_name: String,
    body: String,
    timestamp: NaiveDateTime,
}

impl LogRecord {
    /// Create a record for `short_name` stamped with `timestamp` (local wall-clock time)
    pub fn new(
        short_name: impl Into<String>,
        body: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            short_name: short_name.into(),
            body: body.into(),
            timestamp,
        }
    }

    /// File content, without a trailing newline
    #[inline]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// `<short_name>_<YYYY-MM-DD_HH-MM-SS>.txt`
    pub fn file_name(&self) -> String {
        format!(
            "{}_{}.txt",
            self.short_name,
            self.timestamp.format(TIMESTAMP_FORMAT)
        )
    }
}
