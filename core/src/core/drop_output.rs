use console::strip_ansi_codes;
use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::error::StashError;

lazy_static! {
    // Dropped refs/stash@{0} (f0d0f20f2f61ffd6d6bfe0752deffa38845a3edd)
    static ref DROPPED_HASH: Regex = Regex::new(r"\(([0-9a-f]+)\)").unwrap();
}

/// What `git stash drop` told us about the entry it removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutput {
    Dropped(String),
    /// the output as git printed it
    Malformed(String),
}

impl DropOutput {
    pub fn into_hash(self) -> Result<String, StashError> {
        match self {
            DropOutput::Dropped(hash) => Ok(hash),
            DropOutput::Malformed(output) => Err(StashError::InvalidDropOutput { output }),
        }
    }
}

/// Extract the commit hash echoed by `git stash drop`, the first parenthesized
/// hexadecimal run wins.
pub fn parse_drop_output(output: &str) -> DropOutput {
    let plain = strip_ansi_codes(output);
    match DROPPED_HASH.captures(&plain).and_then(|caps| caps.get(1)) {
        Some(hash) => DropOutput::Dropped(hash.as_str().to_string()),
        None => DropOutput::Malformed(output.to_string()),
    }
}
