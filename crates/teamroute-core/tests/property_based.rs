//! Property-based tests using proptest

use proptest::prelude::*;
use std::io::Cursor;
use teamroute_core::mapping::parse_line;
use teamroute_core::{extract_team, repo_short_name, ChannelLookup, ParseMode};

fn arb_team_code() -> impl Strategy<Value = String> {
    prop::string::string_regex("[sfw][0-9]{2}-[0-9]pm-[0-9]").expect("valid regex")
}

// Team and channel fields free of separators and surrounding whitespace
fn arb_field() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_-]{1,16}").expect("valid regex")
}

proptest! {
    #[test]
    fn test_lookup_returns_first_paired_channel(
        pairs in prop::collection::vec((arb_field(), arb_field()), 1..20),
        pick in any::<prop::sample::Index>(),
    ) {
        let text: String = pairs
            .iter()
            .map(|(team, channel)| format!("{}:{}\n", team, channel))
            .collect();
        let (team, _) = &pairs[pick.index(pairs.len())];
        let expected = pairs.iter().find(|(t, _)| t == team).map(|(_, c)| c.as_str());

        let result = ChannelLookup::scan(Cursor::new(text), team, ParseMode::Strict).unwrap();
        prop_assert_eq!(Some(result.channel()), expected);
    }

    #[test]
    fn test_lookup_absent_team_is_empty(
        pairs in prop::collection::vec((arb_field(), arb_field()), 0..20),
    ) {
        let text: String = pairs
            .iter()
            .map(|(team, channel)| format!("{}:{}\n", team, channel))
            .collect();

        // '.' never appears in generated team names
        let result = ChannelLookup::scan(Cursor::new(text), "no.such.team", ParseMode::Strict).unwrap();
        prop_assert_eq!(result.channel(), "");
    }

    #[test]
    fn test_parse_line_never_panics(s in "\\PC*") {
        let _ = parse_line(&s);
    }

    #[test]
    fn test_lenient_scan_never_fails_on_text(s in "[a-z:\n ]{0,200}") {
        prop_assert!(ChannelLookup::scan(Cursor::new(s), "x", ParseMode::Lenient).is_ok());
    }

    #[test]
    fn test_embedded_team_code_is_extracted(
        prefix in "[a-z]{0,10}-?",
        code in arb_team_code(),
        suffix in "(-[a-z]{1,10})?",
    ) {
        let repository = format!("someorg/{}{}{}", prefix, code, suffix);
        let result = extract_team(repo_short_name(&repository));
        prop_assert_eq!(result.team(), Some(code.as_str()));
    }

    #[test]
    fn test_names_without_digits_never_match(name in "[a-z/-]{0,40}") {
        let result = extract_team(repo_short_name(&name));
        prop_assert!(result.team().is_none());
        prop_assert!(result.message().starts_with("failed to find a team for the repository "));
    }

    #[test]
    fn test_short_name_has_no_slash(repository in "[a-z/]{0,40}") {
        prop_assert!(!repo_short_name(&repository).contains('/'));
    }
}
