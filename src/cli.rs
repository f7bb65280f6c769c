//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for xtag using the
//! `clap` crate.
//!
//! # Commands
//!
//! - **list**: Show the tags applied to each path (default)
//! - **add**: Attach tags to files or directories
//! - **remove**: Remove specific tags, or all of them
//! - **enumerate**: Sorted union of every tag under the given paths
//! - **match**: Entries under the given paths satisfying a tag query
//! - **completion**: Shell completion script on stdout
//!
//! # Design Features
//!
//! - Global `--quiet` flag for scripting-friendly output
//! - Command aliases (e.g., `l` for `list`, `rm` for `remove`)
//! - Paths default to the configured `default_paths` when omitted

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Shared tag/path arguments for commands that mutate tags
#[derive(Parser, Debug, Clone)]
pub struct TagArgs {
    /// Tag to add or remove depending on the subcommand; repeatable
    #[arg(short = 't', long = "tag", value_name = "TAG", num_args = 0..)]
    pub tags: Vec<String>,

    /// Paths to operate on
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "xtag")]
#[command(about = "List, add, or remove tags on files and directories", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The command to run; listing with no paths is the default
    #[must_use]
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::List {
            long: false,
            paths: Vec::new(),
        })
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List all tags applied to each path (default)
    #[command(visible_alias = "l")]
    List {
        /// Also show the entry kind and custom-icon presence
        #[arg(short = 'l', long = "long")]
        long: bool,

        /// Paths to inspect
        #[arg(value_name = "PATH")]
        paths: Vec<String>,
    },

    /// Add tags to files or directories
    #[command(visible_alias = "a")]
    Add {
        #[command(flatten)]
        target: TagArgs,

        /// Replace all existing tags instead of merging
        #[arg(short = 'r', long = "replace")]
        replace: bool,
    },

    /// Remove tags from files or directories
    #[command(visible_alias = "rm")]
    Remove {
        #[command(flatten)]
        target: TagArgs,

        /// Delete every tag from the given paths
        #[arg(short = 'a', long = "all", conflicts_with = "tags")]
        all: bool,
    },

    /// Print the sorted union of all tags under the given paths
    #[command(visible_alias = "e")]
    Enumerate {
        /// Root paths to aggregate
        #[arg(value_name = "PATH")]
        paths: Vec<String>,
    },

    /// List entries under the given paths that carry the given tags
    #[command(visible_alias = "m")]
    Match {
        /// Tag that must be present; repeatable. A literal '*' matches
        /// any tagged entry (a tag actually named '*' cannot be queried)
        #[arg(short = 't', long = "tag", value_name = "TAG", num_args = 0..)]
        tags: Vec<String>,

        /// Skip entries whose tags cannot be read instead of failing
        #[arg(long = "skip-errors")]
        skip_errors: bool,

        /// Root paths to search
        #[arg(value_name = "PATH")]
        paths: Vec<String>,
    },

    /// Generate a shell completion script on stdout
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
