//! First-match channel lookup over a mapping file

use crate::error::{Error, Result};
use crate::mapping::parser::parse_line;
use crate::types::{MissingFile, ParseMode};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// Result of looking a team up in the mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelLookup {
    /// First line whose team field equals the requested team
    Found {
        /// Channel number from that line
        channel: String,
        /// 1-based line number it was found on
        line: usize,
    },
    /// No line matched (or the mapping was absent and that is allowed)
    NotFound,
}

impl ChannelLookup {
    /// Scan a mapping in order and stop at the first exact, case-sensitive match.
    ///
    /// Lines after the match are never read, so a malformed line there does
    /// not fail the lookup even in strict mode.
    pub fn scan<R: BufRead>(reader: R, team: &str, mode: ParseMode) -> Result<Self> {
        debug!(team, "checking team");

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;

            let entry = match parse_line(&line) {
                Ok(Some(entry)) => entry,
                Ok(None) => continue,
                Err(reason) => match mode {
                    ParseMode::Strict => {
                        return Err(Error::MalformedLine {
                            line: line_no,
                            reason,
                        })
                    }
                    ParseMode::Lenient => {
                        warn!(line = line_no, %reason, "skipping malformed mapping line");
                        continue;
                    }
                },
            };

            if entry.team == team {
                debug!(team, channel = entry.channel, line = line_no, "channel found");
                return Ok(ChannelLookup::Found {
                    channel: entry.channel.to_string(),
                    line: line_no,
                });
            }
        }

        debug!(team, "no channel for team");
        Ok(ChannelLookup::NotFound)
    }

    /// Open `path` and scan it.
    pub fn in_file(
        path: impl AsRef<Path>,
        team: &str,
        mode: ParseMode,
        missing: MissingFile,
    ) -> Result<Self> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return match missing {
                    MissingFile::Fail => Err(Error::MappingNotFound(path.to_path_buf())),
                    MissingFile::NotFound => {
                        debug!(path = %path.display(), "mapping file absent, treating as empty");
                        Ok(ChannelLookup::NotFound)
                    }
                };
            }
            Err(e) => return Err(Error::Io(e)),
        };

        Self::scan(BufReader::new(file), team, mode)
    }

    /// Channel number, or `""` when nothing matched
    #[inline]
    pub fn channel(&self) -> &str {
        match self {
            ChannelLookup::Found { channel, .. } => channel,
            ChannelLookup::NotFound => "",
        }
    }

    /// Whether a line matched
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, ChannelLookup::Found { .. })
    }
}
