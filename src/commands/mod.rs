//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed
//! CLI args and runs the operation against the tag store.
//!
//! Commands that operate on several paths handle each path independently:
//! a failure is reported on stderr, the remaining paths are still
//! processed, and the command exits nonzero if any path failed.

use std::path::PathBuf;

use crate::config::XtagConfig;

pub mod add;
pub mod completion;
pub mod enumerate;
pub mod list;
pub mod matches;
pub mod remove;

// Re-export execute functions for convenience
pub use add::execute as add;
pub use completion::execute as completion;
pub use enumerate::execute as enumerate;
pub use list::execute as list;
pub use matches::execute as matches;
pub use remove::execute as remove;

/// The paths a command should operate on: the ones given, or the
/// configured defaults when none were.
pub(crate) fn paths_or_default(paths: Vec<String>, config: &XtagConfig) -> Vec<PathBuf> {
    if paths.is_empty() {
        config.default_paths.clone()
    } else {
        paths.into_iter().map(PathBuf::from).collect()
    }
}
