//! Xtag - tag files and directories through native filesystem metadata
//!
//! This library provides functionality for attaching string labels to
//! filesystem entries. Tags are persisted in extended attributes, so they
//! travel with the files themselves instead of living in a separate
//! database.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod entry;
pub mod output;
pub mod properties;
pub mod query;
pub mod store;
pub mod walk;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum XtagError {
    /// Tag store error
    #[error("Store error: {0}")]
    Store(#[from] store::StoreError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Some of the requested paths could not be processed
    #[error("{0} path(s) could not be processed")]
    Partial(usize),
}
