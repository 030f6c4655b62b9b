#![no_main]
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;
use teamroute_core::mapping::parse_line;
use teamroute_core::{ChannelLookup, ParseMode};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for line in s.lines() {
            if let Ok(Some(entry)) = parse_line(line) {
                assert!(!entry.team.contains(':'));
                assert!(!entry.channel.contains(':'));
            }
        }

        // Lenient scans only fail on I/O, never on content
        assert!(ChannelLookup::scan(Cursor::new(s), "f24-3pm-2", ParseMode::Lenient).is_ok());
        let _ = ChannelLookup::scan(Cursor::new(s), "f24-3pm-2", ParseMode::Strict);
    }
});
