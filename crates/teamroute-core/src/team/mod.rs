//! Team code extraction module

pub mod extractor;

pub use extractor::{extract_team, repo_short_name, TeamMatch, TEAM_PATTERN};
