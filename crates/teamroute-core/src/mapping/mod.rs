//! Team-to-channel mapping module

pub mod lookup;
pub mod parser;

pub use lookup::ChannelLookup;
pub use parser::{parse_line, LineError};
