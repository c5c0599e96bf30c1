//! File access module.
//!
//! Whole-file reads and writes plus a best-effort directory listing. These
//! helpers never panic on missing paths: failures are logged and reported
//! through empty/false return values so demo code can keep going.

use std::fs;
use std::path::Path;
use tracing::warn;

/// Read an entire file into a string.
///
/// A missing or unreadable file logs a warning and returns the empty string.
pub fn read_file<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read file");
            String::new()
        }
    }
}

/// Write a string to a file, creating or truncating it.
///
/// Returns `false` (and logs) on failure.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> bool {
    let path = path.as_ref();
    match fs::write(path, content) {
        Ok(()) => true,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to write file");
            false
        }
    }
}

/// Check whether a path exists.
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}

/// List the entries of a directory by bare name.
///
/// Returns names only (no paths, no metadata, no recursion) and never
/// includes `.` or `..`. A missing or unreadable directory logs and returns
/// an empty list; unreadable individual entries are skipped.
pub fn list_files<P: AsRef<Path>>(dir_path: P) -> Vec<String> {
    let dir_path = dir_path.as_ref();
    let entries = match fs::read_dir(dir_path) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %dir_path.display(), error = %e, "Failed to list directory");
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect()
}
