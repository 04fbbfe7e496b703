// Cleaning configuration: length limit and per-document stop-list.

use anyhow::{Context, Result};
use std::path::Path;

/// Default corpus length limit in characters.
pub const DEFAULT_LENGTH_LIMIT: usize = 50_000;

/// Built-in stop-list for the original target documents. Entries are matched
/// for literal equality against the stripped line.
const BUILTIN_STOP_LIST: &[&str] = &[
    "*  *  *  *  *",
    "*****",
    "CHARLOTTE'S WEB",
    "THE END",
    "Wuthering Heights",
];

/// The built-in boilerplate stop-list.
pub fn default_stop_list() -> &'static [&'static str] {
    BUILTIN_STOP_LIST
}

/// Parameters for one cleaning pass. Always passed in explicitly; nothing in
/// the core reads document-specific constants.
#[derive(Debug, Clone)]
pub struct CleanConfig {
    /// Corpus length limit in characters; the pass halts once exceeded.
    pub length_limit: usize,
    /// Exact-match boilerplate lines to discard.
    pub stop_list: Vec<String>,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            length_limit: DEFAULT_LENGTH_LIMIT,
            stop_list: BUILTIN_STOP_LIST.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CleanConfig {
    /// Replace the stop-list with entries loaded from a file.
    pub fn with_stop_list(mut self, stop_list: Vec<String>) -> Self {
        self.stop_list = stop_list;
        self
    }
}

/// Load a stop-list file: one literal entry per line, empty lines skipped.
/// Entries are taken verbatim apart from a trailing carriage return.
pub async fn load_stop_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read stop-list file: {}", path.display()))?;

    let entries: Vec<String> = content
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect();

    Ok(entries)
}
