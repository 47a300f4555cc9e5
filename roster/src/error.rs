//! Error types reported at the command boundary.

/// Failure of a single command. Each variant renders as a one-line message.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help' for the list of commands")]
    UnknownCommand(String),

    #[error("{command}: {expected}")]
    WrongArgumentCount {
        command: &'static str,
        expected: &'static str,
    },

    #[error("{command}: '{value}' is not a valid integer id")]
    InvalidArgumentFormat { command: &'static str, value: String },

    #[error("'{value}' is not a {kind}, expected one of: {expected}")]
    InvalidEnumValue {
        kind: &'static str,
        value: String,
        expected: String,
    },

    #[error("no worker with id {0}")]
    NotFound(u32),

    #[error("{path}: {reason}")]
    FileAccess { path: String, reason: String },

    #[error("invalid data: input ended while reading {field}")]
    DataExhausted { field: &'static str },

    #[error("invalid value: {0}")]
    Validation(#[from] ValidationError),

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl CommandError {
    pub fn file_access(path: impl Into<String>, err: &anyhow::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            reason: format!("{:#}", err),
        }
    }
}

/// A single field value outside its domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{field} must be {expected}, got '{value}'")]
    Format {
        field: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("{field} {constraint}, got {value}")]
    OutOfRange {
        field: &'static str,
        constraint: String,
        value: String,
    },
}
