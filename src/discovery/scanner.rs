//! File system scanner for discovering canvas records.
//!
//! Recursively scans directories to find all `.canvas.json` files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::codec::CANVAS_EXTENSION;

use super::config::Config;

/// Check whether a path names a canvas record.
pub fn is_canvas_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(CANVAS_EXTENSION))
}

/// Scan a directory for canvas records, sorted by path.
pub fn scan_directory(root: &Path, config: &Config) -> Vec<PathBuf> {
    let mut found = Vec::new();

    if !root.exists() {
        return found;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_dir() || config.is_excluded(path) {
            continue;
        }

        if is_canvas_file(path) {
            found.push(path.to_path_buf());
        }
    }

    found
}

/// Expand a mix of files and directories into canvas record paths.
///
/// Files named explicitly are kept even without the canvas suffix.
pub fn scan_paths(paths: &[PathBuf], config: &Config) -> Vec<PathBuf> {
    let mut found = Vec::new();

    for path in paths {
        if path.is_dir() {
            found.extend(scan_directory(path, config));
        } else {
            found.push(path.clone());
        }
    }

    found
}
