//! Add command - attach tags to files and directories

use crate::{cli::TagArgs, config::XtagConfig, entry::Entry, store::TagStore, XtagError};

type Result<T> = std::result::Result<T, XtagError>;

/// Execute the add command
///
/// # Errors
/// Returns `XtagError::InvalidInput` when no tags are given, or
/// `XtagError::Partial` if any path could not be tagged.
pub fn execute(
    store: &TagStore,
    config: &XtagConfig,
    target: TagArgs,
    replace: bool,
    quiet: bool,
) -> Result<()> {
    if target.tags.is_empty() {
        return Err(XtagError::InvalidInput("No tags provided".into()));
    }

    let paths = super::paths_or_default(target.paths, config);

    let mut failures = 0;
    for path in &paths {
        let result = Entry::resolve(path)
            .and_then(|entry| store.set_tags(&entry, &target.tags, replace));
        match result {
            Ok(()) => {
                if !quiet {
                    println!("Tagged {} with: {}", path.display(), target.tags.join(", "));
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
