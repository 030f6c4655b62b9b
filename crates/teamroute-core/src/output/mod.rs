//! Log records and result formatting module

pub mod format;
pub mod gha;
pub mod record;
pub mod writer;

pub use format::{ChannelReport, OutputFormat, TeamReport};
pub use record::{LogRecord, TIMESTAMP_FORMAT};
pub use writer::LogDirWriter;

#[cfg(test)]
pub(crate) use writer::MemorySink;
