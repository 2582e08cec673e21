//! Line-list input files.

use std::fs;
use std::io;
use std::path::Path;

use crypto_random_core::error::RandomError;
use tracing::debug;

/// Splits `contents` into trimmed, non-empty lines.
///
/// Both `\n` and `\r\n` terminators are accepted. Whitespace-only lines are
/// dropped.
#[must_use]
pub fn parse_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Reads `path` as UTF-8 text and returns its usable lines.
///
/// The returned list may be empty; callers that need at least one line
/// check for that themselves.
///
/// # Errors
///
/// Returns `RandomError::FileNotFound` (with the absolute path) if the file
/// does not exist, or `RandomError::FileUnreadable` for any other I/O or
/// UTF-8 decoding failure.
pub fn read_lines(path: &Path) -> Result<Vec<String>, RandomError> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => RandomError::FileNotFound(
            std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()),
        ),
        _ => RandomError::FileUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    })?;

    let lines = parse_lines(&contents);
    debug!(path = %path.display(), lines = lines.len(), "read input file");
    Ok(lines)
}
