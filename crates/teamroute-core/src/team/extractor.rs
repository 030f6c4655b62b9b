//! Team code extraction from repository names

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Team code: season letter, two-digit year, section digit, `pm`, slot digit (e.g. `f24-3pm-2`)
pub static TEAM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[sfw]\d{2}-\dpm-\d").unwrap());

/// Outcome of searching a repository short name for a team code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamMatch {
    /// The matched substring
    Found(String),
    /// No team code anywhere in the name
    NotFound {
        /// The short name that was searched
        short_name: String,
    },
}

impl TeamMatch {
    /// The line written to the log record and printed: the code, or a failure sentence
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// The team code, if one was found
    #[inline]
    pub fn team(&self) -> Option<&str> {
        match self {
            TeamMatch::Found(team) => Some(team),
            TeamMatch::NotFound { .. } => None,
        }
    }
}

impl fmt::Display for TeamMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamMatch::Found(team) => f.write_str(team),
            TeamMatch::NotFound { short_name } => {
                write!(f, "failed to find a team for the repository {}", short_name)
            }
        }
    }
}

/// Final `/`-delimited segment of a repository identifier.
///
/// `org/repo` → `repo`; `repo` → `repo`; `org/repo/` → `""`.
#[inline]
pub fn repo_short_name(repository: &str) -> &str {
    match repository.rfind('/') {
        Some(pos) => &repository[pos + 1..],
        None => repository,
    }
}

/// Search (not full-match) `short_name` for the leftmost team code.
pub fn extract_team(short_name: &str) -> TeamMatch {
    match TEAM_PATTERN.find(short_name) {
        Some(m) => TeamMatch::Found(m.as_str().to_string()),
        None => TeamMatch::NotFound {
            short_name: short_name.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_short_name() {
        assert_eq!(repo_short_name("myorg/myrepo-f24-3pm-2"), "myrepo-f24-3pm-2");
        assert_eq!(repo_short_name("myrepo"), "myrepo");
        assert_eq!(repo_short_name("a/b/c"), "c");
        assert_eq!(repo_short_name("myorg/"), "");
        assert_eq!(repo_short_name(""), "");
    }

    #[test]
    fn test_extract_from_suffix() {
        let result = extract_team(repo_short_name("myorg/myrepo-f24-3pm-2"));
        assert_eq!(result, TeamMatch::Found("f24-3pm-2".to_string()));
        assert_eq!(result.message(), "f24-3pm-2");
        assert_eq!(result.team(), Some("f24-3pm-2"));
    }

    #[test]
    fn test_extract_anywhere_in_name() {
        assert_eq!(extract_team("s23-1pm-4-project").team(), Some("s23-1pm-4"));
        assert_eq!(extract_team("hw-w25-2pm-9-final").team(), Some("w25-2pm-9"));
    }

    #[test]
    fn test_leftmost_match_wins() {
        assert_eq!(extract_team("f24-3pm-2-s25-1pm-1").team(), Some("f24-3pm-2"));
    }

    #[test]
    fn test_other_season_letters_rejected() {
        assert_matches!(extract_team("x24-3pm-2"), TeamMatch::NotFound { .. });
        assert_matches!(extract_team("F24-3pm-2"), TeamMatch::NotFound { .. });
    }

    #[test]
    fn test_am_and_short_years_rejected() {
        assert_matches!(extract_team("f24-3am-2"), TeamMatch::NotFound { .. });
        assert_matches!(extract_team("f4-3pm-2"), TeamMatch::NotFound { .. });
        assert_matches!(extract_team("f24-3pm-"), TeamMatch::NotFound { .. });
    }

    #[test]
    fn test_not_found_sentence_names_short_name() {
        let result = extract_team(repo_short_name("myorg/myrepo"));
        assert_eq!(
            result.message(),
            "failed to find a team for the repository myrepo"
        );
        assert_eq!(result.team(), None);
    }
}
