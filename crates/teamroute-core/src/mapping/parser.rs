//! `team:channel` line parser

use crate::types::ChannelEntry;
use thiserror::Error;

/// Why a mapping line was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LineError {
    /// No `:` in the line
    #[error("expected `team:channel`, found no ':' separator")]
    MissingSeparator,
    /// More than one `:` in the line
    #[error("expected `team:channel`, found more than one ':' separator")]
    ExtraSeparator,
}

/// Parse one mapping line.
///
/// Surrounding whitespace of the whole line is stripped; the two fields are
/// taken as-is. Whitespace-only lines yield `Ok(None)`.
pub fn parse_line(raw: &str) -> Result<Option<ChannelEntry<'_>>, LineError> {
    let line = raw.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let bytes = line.as_bytes();
    let sep = memchr::memchr(b':', bytes).ok_or(LineError::MissingSeparator)?;
    if memchr::memchr(b':', &bytes[sep + 1..]).is_some() {
        return Err(LineError::ExtraSeparator);
    }

    // ':' is ASCII, so both slice bounds are char boundaries
    Ok(Some(ChannelEntry {
        team: &line[..sep],
        channel: &line[sep + 1..],
    }))
}
