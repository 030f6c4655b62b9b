//! GitHub Actions step outputs

use crate::error::{Error, Result};
use std::io::Write;
use std::path::Path;

/// Heredoc delimiter for multi-line values
const DELIM: &str = "TEAMROUTE_EOF";

/// Append outputs to the `$GITHUB_OUTPUT` file at `path`.
///
/// Values are written verbatim: `name=value` when single-line, otherwise
/// `name<<DELIM` / value / `DELIM`.
pub fn append_outputs(path: &Path, outputs: &[(&str, String)]) -> Result<()> {
    let mut f = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| {
            Error::Output(format!(
                "cannot open GITHUB_OUTPUT ({}): {}",
                path.display(),
                e
            ))
        })?;

    let mut buf = String::with_capacity(outputs.len() * 32);
    for (name, value) in outputs {
        if value.contains(['\n', '\r']) {
            buf.push_str(&format!("{name}<<{DELIM}\n{value}\n{DELIM}\n"));
        } else {
            buf.push_str(&format!("{name}={value}\n"));
        }
    }
    f.write_all(buf.as_bytes())?;
    Ok(())
}
