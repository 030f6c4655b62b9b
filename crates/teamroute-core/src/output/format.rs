//! Result rendering for stdout and GitHub Actions

use crate::error::Result;
use crate::mapping::ChannelLookup;
use crate::team::TeamMatch;
use serde::Serialize;
use std::path::PathBuf;

/// Output format for the CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Bare value on one line
    #[default]
    Plain,
    /// Human-readable sentence
    Sentence,
    /// One JSON object
    Json,
    /// GitHub Actions: write to $GITHUB_OUTPUT, bare value to stdout
    Gha,
}

/// Channel lookup result paired with the team it was looked up for
#[derive(Debug)]
pub struct ChannelReport<'a> {
    /// Requested team
    pub team: &'a str,
    /// Lookup outcome
    pub lookup: &'a ChannelLookup,
}

#[derive(Serialize)]
struct ChannelJson<'a> {
    team: &'a str,
    channel: &'a str,
    found: bool,
    line: Option<usize>,
}

impl ChannelReport<'_> {
    /// Render for stdout (no trailing newline)
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let channel = self.lookup.channel();
        Ok(match format {
            OutputFormat::Plain | OutputFormat::Gha => channel.to_string(),
            OutputFormat::Sentence => match self.lookup {
                ChannelLookup::Found { .. } => {
                    format!("Team {} uses channel {}", self.team, channel)
                }
                ChannelLookup::NotFound => format!("No channel found for team {}", self.team),
            },
            OutputFormat::Json => {
                let line = match self.lookup {
                    ChannelLookup::Found { line, .. } => Some(*line),
                    ChannelLookup::NotFound => None,
                };
                serde_json::to_string(&ChannelJson {
                    team: self.team,
                    channel,
                    found: self.lookup.is_found(),
                    line,
                })?
            }
        })
    }

    /// `$GITHUB_OUTPUT` entries
    pub fn gha_outputs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("channel", self.lookup.channel().to_string()),
            ("channel_found", self.lookup.is_found().to_string()),
        ]
    }
}

/// Everything one team extractor run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamReport {
    /// Repository identifier as given
    pub repository: String,
    /// Final segment of the identifier
    pub short_name: String,
    /// Extraction outcome
    pub outcome: TeamMatch,
    /// Where the log record was written
    pub record_path: PathBuf,
}

#[derive(Serialize)]
struct TeamJson<'a> {
    repository: &'a str,
    short_name: &'a str,
    team: Option<&'a str>,
    found: bool,
    message: String,
    log_file: String,
}

impl TeamReport {
    /// Render for stdout (no trailing newline).
    ///
    /// Plain, sentence and gha all print the log record body verbatim.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Plain | OutputFormat::Sentence | OutputFormat::Gha => {
                self.outcome.message()
            }
            OutputFormat::Json => serde_json::to_string(&TeamJson {
                repository: &self.repository,
                short_name: &self.short_name,
                team: self.outcome.team(),
                found: self.outcome.team().is_some(),
                message: self.outcome.message(),
                log_file: self.record_path.display().to_string(),
            })?,
        })
    }

    /// `$GITHUB_OUTPUT` entries
    pub fn gha_outputs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("team", self.outcome.team().unwrap_or_default().to_string()),
            ("team_found", self.outcome.team().is_some().to_string()),
            ("log_file", self.record_path.display().to_string()),
        ]
    }
}
