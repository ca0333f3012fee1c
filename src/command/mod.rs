mod commands;
mod history;

pub use commands::Command;
pub use history::CommandHistory;

use thiserror::Error;

/// Result type for history operations
pub type CommandResult<T = ()> = Result<T, CommandError>;

/// Errors that can occur when using the command history
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The operation is not valid in the current history state
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),
}
