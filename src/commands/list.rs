//! List command - show the tags applied to each path

use std::path::Path;

use crate::{config::XtagConfig, entry::Entry, output, properties, store::TagStore, XtagError};

type Result<T> = std::result::Result<T, XtagError>;

/// Execute the list command
///
/// # Errors
/// Returns `XtagError::Partial` if any path could not be listed.
pub fn execute(
    store: &TagStore,
    config: &XtagConfig,
    long: bool,
    paths: Vec<String>,
    quiet: bool,
) -> Result<()> {
    let paths = super::paths_or_default(paths, config);
    let with_headers = paths.len() > 1 && !quiet;

    let mut failures = 0;
    for path in &paths {
        if let Err(e) = list_one(store, path, long, with_headers, quiet) {
            eprintln!("{e}");
            failures += 1;
        }
    }

    if failures > 0 {
        return Err(XtagError::Partial(failures));
    }
    Ok(())
}

fn list_one(
    store: &TagStore,
    path: &Path,
    long: bool,
    header: bool,
    quiet: bool,
) -> Result<()> {
    let entry = Entry::resolve(path)?;
    let tags = store.tags_of(&entry)?;

    if header {
        println!("{}", output::path_header(&path.display().to_string()));
    }

    if long && !quiet {
        // Icon inspection is presentational; an unreadable Finder info
        // blob reads as "no icon".
        let icon = properties::has_custom_icon(entry.path()).unwrap_or(false);
        let mut details = output::kind_label(entry.kind()).to_string();
        if icon {
            details.push_str(", custom icon");
        }
        println!("  ({details})");
    }

    if tags.is_empty() {
        if !quiet {
            println!("No tags found.");
        }
    } else {
        for tag in &tags {
            println!("{tag}");
        }
    }

    Ok(())
}
