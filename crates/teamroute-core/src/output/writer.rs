//! Log record writers

use crate::error::{Error, Result};
use crate::output::record::LogRecord;
use crate::traits::RecordSink;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Writes each record to its own file under a log directory
///
/// The directory is created on first write if missing. A record whose file
/// name already exists (same short name, same second) overwrites it.
#[derive(Debug, Clone)]
pub struct LogDirWriter {
    dir: PathBuf,
}

impl LogDirWriter {
    /// Create a writer rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn ensure_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            Error::Output(format!(
                "Failed to create log directory '{}': {}",
                self.dir.display(),
                e
            ))
        })
    }
}

impl RecordSink for LogDirWriter {
    fn persist(&self, record: &LogRecord) -> Result<PathBuf> {
        self.ensure_dir()?;

        let path = self.dir.join(record.file_name());
        let mut file = std::fs::File::create(&path).map_err(|e| {
            Error::Output(format!(
                "Failed to create log file '{}': {}",
                path.display(),
                e
            ))
        })?;
        file.write_all(record.body().as_bytes())?;

        debug!(path = %path.display(), "wrote log record");
        Ok(path)
    }
}

/// In-memory sink that keeps every persisted record
///
/// Paths are computed as `LogDirWriter` would compute them, but nothing
/// touches the filesystem.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemorySink {
    dir: PathBuf,
    records: std::cell::RefCell<Vec<(PathBuf, LogRecord)>>,
}

#[cfg(test)]
impl MemorySink {
    pub(crate) fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            records: std::cell::RefCell::new(Vec::new()),
        }
    }

    /// Records persisted so far, in order
    pub(crate) fn records(&self) -> Vec<(PathBuf, LogRecord)> {
        self.records.borrow().clone()
    }
}

#[cfg(test)]
impl RecordSink for MemorySink {
    fn persist(&self, record: &LogRecord) -> Result<PathBuf> {
        let path = self.dir.join(record.file_name());
        self.records
            .borrow_mut()
            .push((path.clone(), record.clone()));
        Ok(path)
    }
}
