//! Match command - find entries satisfying a tag query

use crate::{
    config::XtagConfig,
    output,
    query::{self, TagQuery},
    store::TagStore,
    XtagError,
};

type Result<T> = std::result::Result<T, XtagError>;

/// Execute the match command
///
/// # Errors
/// Returns `XtagError::InvalidInput` when no tags are given, or a store
/// error if a root does not resolve or a strict evaluation fails.
pub fn execute(
    store: &TagStore,
    config: &XtagConfig,
    tags: &[String],
    skip_errors: bool,
    paths: Vec<String>,
    quiet: bool,
) -> Result<()> {
    let query = TagQuery::from_args(tags)?;
    let roots = super::paths_or_default(paths, config);

    let found = query::match_entries(store, &query, &roots, !skip_errors)?;

    if found.is_empty() {
        if !quiet {
            println!("No matches found.");
        }
    } else {
        for entry in found {
            if quiet {
                println!("{entry}");
            } else {
                println!("{}", output::colorize_path(entry.path()));
            }
        }
    }

    Ok(())
}
