//! Tag store for xtag
//!
//! Provides a clean API for reading and mutating the tag set of one
//! resolved entry. Persistence goes through an injected
//! [`MetadataBackend`], so the store contains the tag semantics (dedup,
//! order preservation, full-set writes) and nothing about the on-disk
//! format.
//!
//! The store holds no state between calls: every operation re-reads the
//! entry's current tags and every mutation writes the full resulting
//! set back. Read-modify-write is not atomic against concurrent external
//! modification of the same entry.

use std::path::Path;

use crate::entry::Entry;

pub mod backend;
pub mod compat;
pub mod error;

pub use backend::{MetadataBackend, TAG_ATTR, XattrBackend};
pub use compat::CompatBackend;
pub use error::StoreError;

/// Tag store that encapsulates all tag read/write operations
pub struct TagStore {
    backend: Box<dyn MetadataBackend>,
}

impl TagStore {
    /// Create a store over the given backend
    #[must_use]
    pub fn new(backend: Box<dyn MetadataBackend>) -> Self {
        Self { backend }
    }

    /// Get the tags attached to an entry
    ///
    /// An entry that has never been tagged yields an empty vector, never
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Metadata` if the underlying attribute read fails.
    pub fn tags_of(&self, entry: &Entry) -> Result<Vec<String>, StoreError> {
        self.backend
            .read_tags(entry.path())
            .map(Option::unwrap_or_default)
            .map_err(|source| StoreError::Metadata {
                path: entry.path().to_path_buf(),
                source,
            })
    }

    /// Set tags on an entry
    ///
    /// With `replace` false the existing tags are preserved in place and
    /// only tags not already present are appended, in argument order.
    /// With `replace` true the entry's tag set becomes exactly the given
    /// list, deduplicated. Duplicates within `new_tags` are dropped either
    /// way.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Metadata` if reading the current set or
    /// writing the result fails. A failed write leaves the previous set
    /// unchanged.
    pub fn set_tags(
        &self,
        entry: &Entry,
        new_tags: &[String],
        replace: bool,
    ) -> Result<(), StoreError> {
        let mut tags = if replace {
            Vec::new()
        } else {
            self.tags_of(entry)?
        };
        for tag in new_tags {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.clone());
            }
        }
        self.write(entry, &tags)
    }

    /// Remove one tag from an entry
    ///
    /// Drops every occurrence of `tag`. Removing a tag the entry does not
    /// carry is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Metadata` if the read or write fails.
    pub fn remove_tag(&self, entry: &Entry, tag: &str) -> Result<(), StoreError> {
        let mut tags = self.tags_of(entry)?;
        tags.retain(|t| t != tag);
        self.write(entry, &tags)
    }

    /// Remove every tag from an entry
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Metadata` if the write fails.
    pub fn clear_tags(&self, entry: &Entry) -> Result<(), StoreError> {
        self.write(entry, &[])
    }

    /// Tolerant read used by tree traversal: any failure, including an
    /// unreadable attribute, reads as "no tags for that entry".
    pub(crate) fn tags_if_readable(&self, path: &Path) -> Option<Vec<String>> {
        self.backend.read_tags(path).ok().flatten()
    }

    fn write(&self, entry: &Entry, tags: &[String]) -> Result<(), StoreError> {
        self.backend
            .write_tags(entry.path(), tags)
            .map_err(|source| StoreError::Metadata {
                path: entry.path().to_path_buf(),
                source,
            })
    }
}
