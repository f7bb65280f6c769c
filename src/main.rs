//! Xtag CLI application entry point
//!
//! Command-line tool for managing tags on files and directories. Tags are
//! stored in the filesystem's own extended attributes, so they survive
//! copies and renames within attribute-capable volumes and need no
//! separate database.
//!
//! # Usage
//!
//! ```bash
//! # List tags on the current directory (default command)
//! xtag
//! xtag list notes.txt
//!
//! # Tag files or directories
//! xtag add -t work -t urgent report.pdf notes.txt
//! xtag add -t archive --replace old/
//!
//! # Remove a tag, or all of them
//! xtag remove -t urgent report.pdf
//! xtag remove --all report.pdf
//!
//! # Every tag used under a tree
//! xtag enumerate ~/documents
//!
//! # Entries carrying all the given tags; '*' matches any tagged entry
//! xtag match -t work -t urgent ~/documents
//! xtag match -t '*' ~/documents
//!
//! # Quiet mode (only output results)
//! xtag -q list notes.txt
//! ```
//!
//! # Configuration
//!
//! Stored in the user's config directory (`~/.config/xtag/config.toml`
//! on Linux): default quietness, default paths, and the legacy tag
//! format switch.

use xtag::{
    cli::{Cli, Commands},
    commands,
    config::XtagConfig,
    store::{backend, TagStore},
    XtagError,
};

type Result<T> = std::result::Result<T, XtagError>;

fn main() -> Result<()> {
    let config = XtagConfig::load()?;

    let cli = Cli::parse_args();
    let quiet = cli.quiet || config.quiet;
    let command = cli.into_command();

    if let Commands::Completion { shell } = &command {
        commands::completion(*shell);
        return Ok(());
    }

    if !backend::supported() {
        return Err(XtagError::InvalidInput(
            "extended attributes are not supported on this platform".into(),
        ));
    }

    let store = TagStore::new(backend::detect(config.legacy_format));

    match command {
        Commands::List { long, paths } => {
            commands::list(&store, &config, long, paths, quiet)?;
        }
        Commands::Add { target, replace } => {
            commands::add(&store, &config, target, replace, quiet)?;
        }
        Commands::Remove { target, all } => {
            commands::remove(&store, &config, target, all, quiet)?;
        }
        Commands::Enumerate { paths } => {
            commands::enumerate(&store, &config, paths, quiet)?;
        }
        Commands::Match {
            tags,
            skip_errors,
            paths,
        } => {
            commands::matches(&store, &config, &tags, skip_errors, paths, quiet)?;
        }
        Commands::Completion { .. } => unreachable!(),
    }

    Ok(())
}
