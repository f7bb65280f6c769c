//! Recursive tag enumeration
//!
//! Aggregates the tags of every entry under one or more roots into a
//! single sorted, duplicate-free list. Deep trees routinely contain
//! entries with transient permission or metadata problems, so a failure
//! on an individual descendant reads as "no tags for that entry" rather
//! than aborting the whole enumeration. Root paths themselves must
//! resolve; a bad root fails the operation before any traversal starts.
//!
//! Independent roots are visited in parallel. The result is a set union,
//! so visitation order cannot affect the output.

use std::collections::BTreeSet;
use std::path::PathBuf;

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::entry::Entry;
use crate::store::{StoreError, TagStore};

/// Collect the sorted union of all tags found under the given roots
///
/// Each root contributes its own tags plus, for directories, the tags of
/// every descendant file and subdirectory.
///
/// # Errors
///
/// Returns `StoreError::InvalidPath` if any root does not resolve.
/// Descendant failures are swallowed.
pub fn enumerate_tags(store: &TagStore, roots: &[PathBuf]) -> Result<Vec<String>, StoreError> {
    let entries = roots
        .iter()
        .map(Entry::resolve)
        .collect::<Result<Vec<_>, _>>()?;

    let union = entries
        .par_iter()
        .map(|root| collect_subtree(store, root))
        .reduce(BTreeSet::new, |mut acc, set| {
            acc.extend(set);
            acc
        });

    Ok(union.into_iter().collect())
}

fn collect_subtree(store: &TagStore, root: &Entry) -> BTreeSet<String> {
    let mut tags = BTreeSet::new();
    if let Some(own) = store.tags_if_readable(root.path()) {
        tags.extend(own);
    }
    if root.is_directory() {
        // Walk errors (unreadable subdirectories) are skipped along with
        // metadata errors.
        for descendant in WalkDir::new(root.path())
            .min_depth(1)
            .into_iter()
            .filter_map(Result::ok)
        {
            if let Some(found) = store.tags_if_readable(descendant.path()) {
                tags.extend(found);
            }
        }
    }
    tags
}
