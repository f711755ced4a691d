//! File utility functions

use std::path::PathBuf;

/// Expand a user-supplied path into an absolute one.
///
/// - `~` and `~/rest` resolve against the home directory
/// - relative paths (`static`, `./data`, `../pokemon.db`) resolve against the
///   current directory
/// - absolute paths are returned unchanged
/// - surrounding whitespace is ignored, and an empty string is the current directory
pub fn expand_path(path: &str) -> PathBuf {
    let path = path.trim();

    if path.is_empty() {
        return std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    }

    let expanded = match path.strip_prefix('~') {
        Some("") => dirs::home_dir().unwrap_or_else(|| PathBuf::from(path)),
        Some(rest) if rest.starts_with('/') || rest.starts_with('\\') => dirs::home_dir()
            .map(|home| home.join(&rest[1..]))
            .unwrap_or_else(|| PathBuf::from(path)),
        _ => PathBuf::from(path),
    };

    if expanded.is_relative() {
        std::env::current_dir()
            .map(|cwd| cwd.join(&expanded))
            .unwrap_or(expanded)
    } else {
        expanded
    }
}
