//! Core type definitions with zero-copy design

use std::borrow::Cow;

/// Default location of the team-to-channel mapping, relative to the repository root
pub const DEFAULT_MAPPING_FILE: &str = ".github/workflows/scripts/teams.txt";

/// Default directory for team extractor log records
pub const DEFAULT_LOG_DIR: &str = "logs";

/// One `team:channel` pair, borrowed from the line it was parsed from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelEntry<'a> {
    /// Team name (left of the colon, untrimmed)
    pub team: &'a str,
    /// Channel number (right of the colon, untrimmed)
    pub channel: &'a str,
}

/// How the mapping scanner treats lines that are not `team:channel`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// First malformed line aborts the lookup
    #[default]
    Strict,
    /// Malformed lines are logged and skipped
    Lenient,
}

/// What to do when the mapping file does not exist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingFile {
    /// Propagate `Error::MappingNotFound`
    #[default]
    Fail,
    /// Treat an absent file as an empty mapping
    NotFound,
}

/// Input configuration for the channel lookup
#[derive(Debug, Clone)]
pub struct LookupConfig<'a> {
    /// Team to look up (the `TEAM` variable)
    pub team: Option<Cow<'a, str>>,
    /// Mapping file path
    pub mapping_file: Cow<'a, str>,
    /// Malformed line handling
    pub parse_mode: ParseMode,
    /// Absent mapping file handling
    pub missing_file: MissingFile,
}

impl Default for LookupConfig<'_> {
    fn default() -> Self {
        Self {
            team: None,
            mapping_file: Cow::Borrowed(DEFAULT_MAPPING_FILE),
            parse_mode: ParseMode::Strict,
            missing_file: MissingFile::Fail,
        }
    }
}

/// Input configuration for the team extractor
#[derive(Debug, Clone, Default)]
pub struct ExtractConfig<'a> {
    /// Slash-delimited repository identifier (the `GITHUB_REPOSITORY` variable)
    pub repository: Option<Cow<'a, str>>,
}
