//! Dotenv-style env-file parsing.
//!
//! Produces the key/value pairs that get pushed to the remote secret store.
//! Kept separate from the propagation loop so delimiter edge cases can be
//! tested without invoking any external process.

use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Parse env-file contents into ordered key/value pairs.
///
/// Skips empty lines and comments. Lines are split on the first `=` only,
/// so values may themselves contain `=` characters. Keys and values are
/// whitespace-trimmed and one layer of surrounding quotes is stripped from
/// the value. Duplicate keys keep their first position; the last value wins.
pub fn parse(contents: &str) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = Vec::new();

    for line in contents.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            debug!("skipping malformed env line: {}", line);
            continue;
        };

        let key = key.trim();
        let value = value.trim().trim_matches('"').trim_matches('\'');

        if key.is_empty() {
            debug!("skipping env line with empty key");
            continue;
        }

        match pairs.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value.to_string(),
            None => pairs.push((key.to_string(), value.to_string())),
        }
    }

    pairs
}

/// Read and parse an env file from disk.
pub fn load(path: &Path) -> Result<Vec<(String, String)>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(parse(&contents))
}
