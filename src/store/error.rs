//! Store-specific error types
//!
//! Two failure classes exist: a path that cannot be resolved at all, and
//! a metadata read or write that failed on an otherwise valid entry.
//! Metadata failures are not retried; they are typically permission or
//! filesystem-capability problems that a retry will not fix.

use std::path::PathBuf;
use thiserror::Error;

/// Tag store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Path does not exist, or its file-vs-directory type cannot be determined
    #[error("Invalid path: {0} does not exist")]
    InvalidPath(String),

    /// Reading or writing the tag metadata of an entry failed
    #[error("Metadata access failed for {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
