//! Output formatting for CLI display
//!
//! This module provides utilities for formatting output in the CLI,
//! including per-path headers and match coloring.

use colored::Colorize;
use std::path::Path;

use crate::entry::EntryKind;

/// Header printed above a path's tags when listing several paths
#[must_use]
pub fn path_header(path: &str) -> String {
    format!("{}:", path.bold())
}

/// Human label for an entry kind
#[must_use]
pub const fn kind_label(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::File => "file",
        EntryKind::Directory => "directory",
    }
}

/// Color a matched path based on existence (green if present, red if it
/// vanished between matching and printing)
#[must_use]
pub fn colorize_path(path: &Path) -> String {
    let formatted = path.display().to_string();
    if path.exists() {
        formatted.green().to_string()
    } else {
        formatted.red().to_string()
    }
}
