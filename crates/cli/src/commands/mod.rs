//! Subcommand implementations.
//!
//! Each command reads and writes through the storage façade in
//! [`AppState`](flora_storefront::state::AppState) and renders its result to
//! the given writer.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod chat;
pub mod orders;

use thiserror::Error;

use flora_storefront::StorefrontError;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A storefront operation was rejected.
    #[error(transparent)]
    Storefront(#[from] StorefrontError),

    /// Writing output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// A command-line value could not be understood.
    #[error("Invalid {what}: {value}")]
    InvalidArgument { what: &'static str, value: String },

    /// The requested record does not exist.
    #[error("{0} not found")]
    NotFound(String),
}

pub type CommandResult = Result<(), CommandError>;
