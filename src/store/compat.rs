//! Legacy tag format and its batch-operation engine
//!
//! Releases before 0.2 stored tags as newline-joined plain text and
//! mutated them through an explicit batch facility: one operation mode
//! (add or remove), one tag list, applied to a batch of entries in a
//! single pass. [`CompatBackend`] keeps that write path alive behind the
//! uniform [`MetadataBackend`] contract so the rest of the engine never
//! sees the difference.

use std::io;
use std::path::{Path, PathBuf};

use crate::store::backend::{self, MetadataBackend, TAG_ATTR};

/// Mutation applied by a batch operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchMode {
    /// Append tags not already present
    Add,
    /// Drop every occurrence of the given tags
    Remove,
}

/// One legacy-style mutation: a mode and a tag list applied to a batch
/// of entries
#[derive(Debug)]
pub struct BatchOperation {
    pub mode: BatchMode,
    pub tags: Vec<String>,
    pub entries: Vec<PathBuf>,
}

impl BatchOperation {
    /// Apply the operation to every entry in the batch
    ///
    /// # Errors
    ///
    /// Returns the first `io::Error` encountered; entries earlier in the
    /// batch keep their already-applied result.
    pub fn perform(&self) -> io::Result<()> {
        for entry in &self.entries {
            let current = read_raw(entry)?.unwrap_or_default();
            let next = apply(self.mode, current, &self.tags);
            write_raw(entry, &next)?;
        }
        Ok(())
    }
}

/// Pure mutation rule shared by both batch modes
fn apply(mode: BatchMode, mut current: Vec<String>, tags: &[String]) -> Vec<String> {
    match mode {
        BatchMode::Add => {
            for tag in tags {
                if !current.iter().any(|t| t == tag) {
                    current.push(tag.clone());
                }
            }
        }
        BatchMode::Remove => {
            current.retain(|t| !tags.contains(t));
        }
    }
    current
}

/// Decode the newline-joined encoding, dropping empty segments
pub(crate) fn decode(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn encode(tags: &[String]) -> Vec<u8> {
    tags.join("\n").into_bytes()
}

fn read_raw(path: &Path) -> io::Result<Option<Vec<String>>> {
    Ok(xattr::get(path, TAG_ATTR)?.map(|bytes| decode(&bytes)))
}

fn write_raw(path: &Path, tags: &[String]) -> io::Result<()> {
    if tags.is_empty() {
        return backend::remove_attr(path);
    }
    xattr::set(path, TAG_ATTR, &encode(tags))
}

/// Backend writing the pre-0.2 format through batch operations
///
/// A full-set write is expressed as the two mutations the legacy engine
/// understands: remove what disappeared, add what is new. Tags that
/// survive a replace keep their on-disk position, which is what the old
/// releases did.
pub struct CompatBackend;

impl MetadataBackend for CompatBackend {
    fn read_tags(&self, path: &Path) -> io::Result<Option<Vec<String>>> {
        read_raw(path)
    }

    fn write_tags(&self, path: &Path, tags: &[String]) -> io::Result<()> {
        let current = read_raw(path)?.unwrap_or_default();

        let removed: Vec<String> = current
            .iter()
            .filter(|t| !tags.contains(*t))
            .cloned()
            .collect();
        if !removed.is_empty() {
            BatchOperation {
                mode: BatchMode::Remove,
                tags: removed,
                entries: vec![path.to_path_buf()],
            }
            .perform()?;
        }

        let added: Vec<String> = tags
            .iter()
            .filter(|t| !current.contains(*t))
            .cloned()
            .collect();
        if !added.is_empty() {
            BatchOperation {
                mode: BatchMode::Add,
                tags: added,
                entries: vec![path.to_path_buf()],
            }
            .perform()?;
        }

        Ok(())
    }
}
