//! Filesystem helpers for the CLI driver.

use std::path::Path;

/// Check if a path exists and is a file.
pub fn is_file(path: &Path) -> bool {
    path.is_file()
}

/// Read a file to a string, for use by the configuration loader.
pub fn read_file(path: &Path) -> std::io::Result<String> {
    std::fs::read_to_string(path)
}
