//! Remove command - strip specific tags, or all of them

use dialoguer::Confirm;

use crate::{cli::TagArgs, config::XtagConfig, entry::Entry, store::TagStore, XtagError};

type Result<T> = std::result::Result<T, XtagError>;

/// Execute the remove command
///
/// With `--all` every tag is deleted from the given paths, after a
/// confirmation prompt unless quiet.
///
/// # Errors
/// Returns `XtagError::Partial` if any path could not be processed, or
/// `XtagError::InvalidInput` if the confirmation prompt fails.
pub fn execute(
    store: &TagStore,
    config: &XtagConfig,
    target: TagArgs,
    all: bool,
    quiet: bool,
) -> Result<()> {
    if !all && target.tags.is_empty() {
        println!("No tags marked for removal.");
        return Ok(());
    }

    let paths = super::paths_or_default(target.paths, config);

    if all && !confirm(&format!("Remove all tags from {} path(s)?", paths.len()), quiet)? {
        if !quiet {
            println!("Cancelled.");
        }
        return Ok(());
    }

    let mut failures = 0;
    for path in &paths {
        let result = if all {
            Entry::resolve(path).and_then(|entry| store.clear_tags(&entry))
        } else {
            remove_listed(store, path, &target.tags)
        };
        match result {
            Ok(()) => {
                if !quiet {
                    if all {
                        println!("Removed all tags from {}", path.display());
                    } else {
                        println!(
                            "Removed tags {} from {}",
                            target.tags.join(", "),
                            path.display()
                        );
                    }
                }
            }
            Err(e) => {
                eprintln!("{e}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(XtagError::Partial(failures));
    }
    Ok(())
}

fn remove_listed(
    store: &TagStore,
    path: &std::path::Path,
    tags: &[String],
) -> std::result::Result<(), crate::store::StoreError> {
    let entry = Entry::resolve(path)?;
    for tag in tags {
        store.remove_tag(&entry, tag)?;
    }
    Ok(())
}

/// Prompt user for yes/no confirmation using dialoguer
fn confirm(prompt: &str, quiet: bool) -> Result<bool> {
    if quiet {
        return Ok(true);
    }

    Confirm::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| XtagError::InvalidInput(format!("Confirmation failed: {e}")))
}
