//! Testing utilities for xtag
//!
//! Provides an in-memory metadata backend and temporary directory-tree
//! fixtures so engine tests never depend on the host filesystem
//! supporting extended attributes.
//!
//! Only available when compiled with `cfg(test)`.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::store::{MetadataBackend, TagStore};

/// In-memory [`MetadataBackend`] keyed by path
///
/// Clones share the same underlying map, so a test can keep a handle to
/// inspect or sabotage the backend after moving one into a `TagStore`.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    tags: Arc<Mutex<HashMap<PathBuf, Vec<String>>>>,
    failing: Arc<Mutex<HashSet<PathBuf>>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every read of `path` fail with a permission error, for
    /// exercising strict and tolerant error paths.
    pub fn fail_reads_for(&self, path: impl AsRef<Path>) {
        self.failing
            .lock()
            .unwrap()
            .insert(path.as_ref().to_path_buf());
    }

    /// Snapshot of the tags currently stored for `path`
    #[must_use]
    pub fn stored(&self, path: impl AsRef<Path>) -> Option<Vec<String>> {
        self.tags.lock().unwrap().get(path.as_ref()).cloned()
    }
}

impl MetadataBackend for MemoryBackend {
    fn read_tags(&self, path: &Path) -> io::Result<Option<Vec<String>>> {
        if self.failing.lock().unwrap().contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "simulated metadata failure",
            ));
        }
        Ok(self.tags.lock().unwrap().get(path).cloned())
    }

    fn write_tags(&self, path: &Path, tags: &[String]) -> io::Result<()> {
        let mut map = self.tags.lock().unwrap();
        if tags.is_empty() {
            map.remove(path);
        } else {
            map.insert(path.to_path_buf(), tags.to_vec());
        }
        Ok(())
    }
}

/// Store backed by a fresh `MemoryBackend`, plus a handle to it
#[must_use]
pub fn memory_store() -> (TagStore, MemoryBackend) {
    let backend = MemoryBackend::new();
    (TagStore::new(Box::new(backend.clone())), backend)
}

/// Temporary directory tree that cleans up on drop
///
/// Thin wrapper over `tempfile::TempDir` with helpers for laying out
/// files and subdirectories by relative path.
pub struct TempTree {
    dir: tempfile::TempDir,
}

impl TempTree {
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a file (and any missing parent directories) under the tree
    ///
    /// # Panics
    /// Panics on I/O failure; fixtures are not expected to fail.
    pub fn file(&self, rel: impl AsRef<Path>) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&path, b"test content").expect("Failed to create test file");
        path
    }

    /// Create a subdirectory under the tree
    ///
    /// # Panics
    /// Panics on I/O failure.
    pub fn dir(&self, rel: impl AsRef<Path>) -> PathBuf {
        let path = self.dir.path().join(rel);
        fs::create_dir_all(&path).expect("Failed to create test dir");
        path
    }
}

impl Default for TempTree {
    fn default() -> Self {
        Self::new()
    }
}
