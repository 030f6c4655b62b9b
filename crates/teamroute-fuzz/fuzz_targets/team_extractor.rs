#![no_main]
use libfuzzer_sys::fuzz_target;
use teamroute_core::{extract_team, repo_short_name, TeamMatch};

fuzz_target!(|data: &[u8]| {
    let repository = String::from_utf8_lossy(data);
    let short_name = repo_short_name(&repository);
    assert!(!short_name.contains('/'));

    match extract_team(short_name) {
        TeamMatch::Found(team) => assert!(short_name.contains(team.as_str())),
        TeamMatch::NotFound { short_name: searched } => assert_eq!(searched, short_name),
    }
});
