//! Resolved filesystem entries
//!
//! An [`Entry`] is the canonical reference to one filesystem location:
//! the path the user gave plus its file-or-directory classification,
//! established by a single stat call at resolution time. Entries are
//! created on demand and never cached across operations.

use std::fs;
use std::path::{Path, PathBuf};

use crate::store::StoreError;

/// File-vs-directory classification of a resolved entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file (or anything that is not a directory)
    File,
    /// A directory
    Directory,
}

/// A resolved reference to one filesystem location
///
/// Carries the path together with its classification so later decisions
/// (recurse or evaluate directly) never have to re-probe the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    path: PathBuf,
    kind: EntryKind,
}

impl Entry {
    /// Resolve a user-supplied path into an entry
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidPath` if the path does not exist or its
    /// metadata cannot be read. Classification failures are never silently
    /// defaulted to "file".
    pub fn resolve<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        match fs::metadata(path) {
            Ok(meta) => Ok(Self {
                kind: if meta.is_dir() {
                    EntryKind::Directory
                } else {
                    EntryKind::File
                },
                path: path.to_path_buf(),
            }),
            Err(_) => Err(StoreError::InvalidPath(path.display().to_string())),
        }
    }

    /// Construct an entry whose classification is already known, e.g.
    /// from a directory-walk record. Skips the stat call.
    pub(crate) fn from_parts(path: PathBuf, kind: EntryKind) -> Self {
        Self { path, kind }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        self.kind
    }

    #[must_use]
    pub const fn is_directory(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
