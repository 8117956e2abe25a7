/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::core::types::ProcessId;
use crate::process::types::ProcessRecord;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ready queue errors with serialization support
///
/// Both variants leave the list unchanged.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum QueueError {
    #[error("Process id exists - {existing}")]
    #[diagnostic(
        code(queue::duplicate_id),
        help("Delete the existing process first or choose another id.")
    )]
    DuplicateId { existing: Box<ProcessRecord> },

    #[error("Process {id} does not exist")]
    #[diagnostic(
        code(queue::not_found),
        help("The process may have been deleted or never inserted.")
    )]
    NotFound { id: ProcessId },
}

/// Command parsing errors
///
/// Recovered by the dispatcher: the offending command is skipped.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum CommandError {
    #[error("Missing {field} for '{op}' command")]
    #[diagnostic(
        code(command::missing_argument),
        help("Input ended before the command was complete.")
    )]
    MissingArgument { op: char, field: String },

    #[error("Invalid {field}: '{token}' is not an integer")]
    #[diagnostic(
        code(command::invalid_integer),
        help("Numeric fields must fit in a signed 32-bit integer.")
    )]
    InvalidInteger { field: String, token: String },

    #[error("Program name is {len} bytes, limit is {max}")]
    #[diagnostic(
        code(command::program_name_too_long),
        help("Shorten the program name.")
    )]
    ProgramNameTooLong { len: usize, max: usize },

    #[error("Unknown operation '{token}'")]
    #[diagnostic(
        code(command::unknown_operation),
        help("Use '+', '-', '?' or '#'.")
    )]
    UnknownOperation { token: String },
}

/// Unified application error with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum AppError {
    #[error("Ready queue error: {0}")]
    #[diagnostic(transparent)]
    Queue(#[from] QueueError),

    #[error("Command error: {0}")]
    #[diagnostic(transparent)]
    Command(#[from] CommandError),

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(app::io_error),
        help("Reading commands or writing output failed. Check the input file and output stream.")
    )]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(app::serialization_error))]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(app::configuration_error),
        help("Invalid configuration. Review command line flags and environment variables.")
    )]
    Configuration(String),
}

impl AppError {
    /// Whether the command loop can continue after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Queue(_) | AppError::Command(_))
    }
}
