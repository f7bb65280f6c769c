//! Tag queries and entry matching
//!
//! A [`TagQuery`] is either the wildcard ("any tagged entry") or a set of
//! required tags with AND semantics. The wildcard is an explicit variant,
//! not a magic string: only the CLI boundary maps a literal `*` argument
//! to it, so the engine itself has no ambiguity with a tag that happens
//! to be named `*`.
//!
//! Matching recurses into directories and appends satisfying entries in
//! traversal order. The output is not sorted, but it is stable for a
//! given filesystem state because traversal stays serial.

use std::path::PathBuf;

use walkdir::WalkDir;

use crate::entry::{Entry, EntryKind};
use crate::store::{StoreError, TagStore};
use crate::XtagError;

/// Predicate over an entry's tag set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagQuery {
    /// Matches any entry carrying at least one tag
    Any,
    /// Matches entries whose tag set contains every listed tag
    All(Vec<String>),
}

impl TagQuery {
    /// Build a query from raw CLI tag arguments
    ///
    /// A literal `*` anywhere in the list selects the wildcard query;
    /// otherwise every listed tag must be present on a matching entry.
    ///
    /// # Errors
    ///
    /// Returns `XtagError::InvalidInput` when no tags are given.
    pub fn from_args(tags: &[String]) -> Result<Self, XtagError> {
        if tags.iter().any(|t| t == "*") {
            return Ok(Self::Any);
        }
        if tags.is_empty() {
            return Err(XtagError::InvalidInput(
                "No tags provided. Use --tag, or --tag '*' to match any tagged entry".into(),
            ));
        }
        Ok(Self::All(tags.to_vec()))
    }

    /// Whether a tag set satisfies this query
    #[must_use]
    pub fn matches(&self, tags: &[String]) -> bool {
        match self {
            Self::Any => !tags.is_empty(),
            Self::All(required) => required.iter().all(|r| tags.iter().any(|t| t == r)),
        }
    }
}

/// Find every entry under the given roots that satisfies the query
///
/// A file root is evaluated directly against its own tag set. A directory
/// root is walked and each descendant evaluated instead of the root
/// itself; a directory with no descendants at all is treated like a file.
///
/// Direct evaluation propagates a tag-read failure when `strict` is set
/// and skips the entry otherwise. Descendant evaluation always skips
/// unreadable entries, matching the enumeration policy.
///
/// # Errors
///
/// Returns `StoreError::InvalidPath` if a root does not resolve, or
/// `StoreError::Metadata` from a strict direct evaluation.
pub fn match_entries(
    store: &TagStore,
    query: &TagQuery,
    roots: &[PathBuf],
    strict: bool,
) -> Result<Vec<Entry>, StoreError> {
    let mut matches = Vec::new();

    for root in roots {
        let entry = Entry::resolve(root)?;
        if !entry.is_directory() {
            evaluate_direct(store, entry, query, strict, &mut matches)?;
            continue;
        }

        let mut walker = WalkDir::new(entry.path())
            .min_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .peekable();

        if walker.peek().is_none() {
            // Childless directory: nothing to recurse into, so the root
            // itself is the candidate.
            evaluate_direct(store, entry, query, strict, &mut matches)?;
            continue;
        }

        for descendant in walker {
            let kind = if descendant.file_type().is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            let candidate = Entry::from_parts(descendant.into_path(), kind);
            if let Some(tags) = store.tags_if_readable(candidate.path()) {
                if query.matches(&tags) {
                    matches.push(candidate);
                }
            }
        }
    }

    Ok(matches)
}

fn evaluate_direct(
    store: &TagStore,
    entry: Entry,
    query: &TagQuery,
    strict: bool,
    matches: &mut Vec<Entry>,
) -> Result<(), StoreError> {
    match store.tags_of(&entry) {
        Ok(tags) => {
            if query.matches(&tags) {
                matches.push(entry);
            }
            Ok(())
        }
        Err(e) if strict => Err(e),
        Err(_) => Ok(()),
    }
}
