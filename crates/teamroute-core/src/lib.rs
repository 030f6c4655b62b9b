//! # teamroute core
//!
//! Two CI helpers for course repositories:
//! - **Channel lookup**: map a team name to a messaging channel number using a
//!   `team:channel` text file (first match wins).
//! - **Team extraction**: pull a `[sfw]NN-Npm-N` team code out of a repository
//!   name and file the result as a timestamped log record.
//!
//! Inputs are passed explicitly; reading the environment is the caller's job.
//!
//! ## Example
//!
//! ```no_run
//! use teamroute_core::{find_channel, LookupConfig};
//! use std::borrow::Cow;
//!
//! # fn example() -> teamroute_core::Result<()> {
//! let config = LookupConfig {
//!     team: Some(Cow::Borrowed("f24-3pm-2")),
//!     ..Default::default()
//! };
//!
//! let lookup = find_channel(&config)?;
//! println!("{}", lookup.channel());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs, rust_2018_idioms)]

pub mod error;
pub mod mapping;
pub mod output;
pub mod team;
pub mod traits;
pub mod types;

pub use error::{Error, ErrorKind, Result};
pub use mapping::ChannelLookup;
pub use output::{LogDirWriter, LogRecord, OutputFormat, TeamReport};
pub use team::{extract_team, repo_short_name, TeamMatch};
pub use traits::RecordSink;
pub use types::{ExtractConfig, LookupConfig, MissingFile, ParseMode};

use chrono::NaiveDateTime;
use std::borrow::Cow;
use tracing::info;

/// Empty values count as unset; CI runners export empty strings for missing inputs
fn required<'c>(value: &'c Option<Cow<'_, str>>, name: &str) -> Result<&'c str> {
    value
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::missing(name))
}

/// Look up the channel for `config.team` in `config.mapping_file`
///
/// A team with no matching line is not an error: the result is
/// `ChannelLookup::NotFound` and `channel()` is `""`.
pub fn find_channel(config: &LookupConfig<'_>) -> Result<ChannelLookup> {
    let team = required(&config.team, "TEAM")?;
    ChannelLookup::in_file(
        &*config.mapping_file,
        team,
        config.parse_mode,
        config.missing_file,
    )
}

/// Extract the team code from `config.repository` and persist the result
///
/// A record is written whether or not a team code was found; its body is
/// exactly `TeamMatch::message()`.
pub fn find_team<S: RecordSink>(
    config: &ExtractConfig<'_>,
    sink: &S,
    now: NaiveDateTime,
) -> Result<TeamReport> {
    let repository = required(&config.repository, "GITHUB_REPOSITORY")?;
    let short_name = repo_short_name(repository);
    let outcome = extract_team(short_name);

    let record = LogRecord::new(short_name, outcome.message(), now);
    let record_path = sink.persist(&record)?;

    info!(
        repository,
        team = outcome.team().unwrap_or("<none>"),
        log_file = %record_path.display(),
        "team extraction finished"
    );

    Ok(TeamReport {
        repository: repository.to_string(),
        short_name: short_name.to_string(),
        outcome,
        record_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MemorySink;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 11, 5)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_find_channel_requires_team() {
        let err = find_channel(&LookupConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert_eq!(err.message(), "TEAM not set");
    }

    #[test]
    fn test_find_channel_empty_team_is_unset() {
        let config = LookupConfig {
            team: Some(Cow::Borrowed("")),
            ..Default::default()
        };
        assert_eq!(find_channel(&config).unwrap_err().kind(), ErrorKind::Config);
    }

    #[test]
    fn test_find_team_requires_repository() {
        let sink = MemorySink::new("logs");
        let err = find_team(&ExtractConfig::default(), &sink, noon()).unwrap_err();
        assert_eq!(err.message(), "GITHUB_REPOSITORY not set");
        assert!(sink.records().is_empty());
    }

    #[test]
    fn test_find_team_persists_match() {
        let sink = MemorySink::new("logs");
        let config = ExtractConfig {
            repository: Some(Cow::Borrowed("myorg/myrepo-f24-3pm-2")),
        };

        let report = find_team(&config, &sink, noon()).unwrap();

        assert_eq!(report.outcome.team(), Some("f24-3pm-2"));
        assert_eq!(report.short_name, "myrepo-f24-3pm-2");
        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].1.body(), "f24-3pm-2");
        assert_eq!(records[0].0, report.record_path);
    }

    #[test]
    fn test_find_team_persists_failure_sentence() {
        let sink = MemorySink::new("logs");
        let config = ExtractConfig {
            repository: Some(Cow::Borrowed("myorg/myrepo")),
        };

        let report = find_team(&config, &sink, noon()).unwrap();

        assert_eq!(
            sink.records()[0].1.body(),
            "failed to find a team for the repository myrepo"
        );
        assert_eq!(
            report.record_path,
            std::path::PathBuf::from("logs/myrepo_2024-11-05_12-00-00.txt")
        );
    }
}
