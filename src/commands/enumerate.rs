//! Enumerate command - sorted union of every tag under the given paths

use crate::{config::XtagConfig, store::TagStore, walk, XtagError};

type Result<T> = std::result::Result<T, XtagError>;

/// Execute the enumerate command
///
/// # Errors
/// Returns an error if any root path does not resolve.
pub fn execute(
    store: &TagStore,
    config: &XtagConfig,
    paths: Vec<String>,
    quiet: bool,
) -> Result<()> {
    let roots = super::paths_or_default(paths, config);
    let tags = walk::enumerate_tags(store, &roots)?;

    if tags.is_empty() {
        if !quiet {
            println!("No tags found.");
        }
    } else {
        for tag in tags {
            println!("{tag}");
        }
    }

    Ok(())
}
