//! Error types for the command dispatcher
//!
//! Every variant is terminal for the current invocation and maps to exit
//! status 1.

use crate::utils::numeric::PositiveIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for command execution
#[derive(Error, Debug)]
pub enum CliError {
    /// A command was called with fewer arguments than it needs
    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    /// An argument failed positive-integer validation
    #[error("{what} must be a positive integer, got '{value}': {source}")]
    InvalidInteger {
        what: &'static str,
        value: String,
        #[source]
        source: PositiveIntError,
    },

    /// An argument was present but unusable for a non-numeric reason
    #[error("invalid argument for '{command}': {message}")]
    InvalidArgument {
        command: &'static str,
        message: String,
    },

    /// A global option clap could not accept, such as `--debug=yes`
    #[error("{0}")]
    InvalidOption(String),

    /// The first token matched no command
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    /// File system operation errors
    #[error("{operation} '{path}': {source}")]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to stdout or stderr failed
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    /// Create a new missing-argument error
    pub fn missing_argument(command: &'static str, expected: &'static str) -> Self {
        Self::MissingArgument { command, expected }
    }

    /// Create a new invalid-integer error
    pub fn invalid_integer(
        what: &'static str,
        value: impl Into<String>,
        source: PositiveIntError,
    ) -> Self {
        Self::InvalidInteger {
            what,
            value: value.into(),
            source,
        }
    }

    /// Create a new invalid-argument error
    pub fn invalid_argument(command: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            command,
            message: message.into(),
        }
    }

    /// Create a new unknown-command error
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::UnknownCommand(name.into())
    }

    /// Create a new file system error
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Process exit status reported for this error
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Whether the usage text should follow the error message
    pub fn shows_usage(&self) -> bool {
        matches!(self, Self::UnknownCommand(_) | Self::InvalidOption(_))
    }
}

impl From<clap::Error> for CliError {
    /// Keeps only clap's one-line message; the dispatcher prints its own usage
    fn from(err: clap::Error) -> Self {
        let rendered = err.to_string();
        let message = rendered
            .lines()
            .next()
            .unwrap_or_default()
            .trim_start_matches("error: ")
            .to_string();
        Self::InvalidOption(message)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CliError>;
