//! Seams for side-effecting collaborators

use crate::error::Result;
use crate::output::record::LogRecord;
use std::path::PathBuf;

/// Destination for team extractor log records
///
/// The extractor computes its result as a pure function; persisting it is
/// delegated here so tests can swap the filesystem for memory.
pub trait RecordSink {
    /// Persist `record`, returning the path it was (or would be) written to
    fn persist(&self, record: &LogRecord) -> Result<PathBuf>;
}
