//! Error types for the CLI

use core_types::GuestError;
use std::fmt;

/// CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Guest-level read error
    GuestError(GuestError),

    /// Malformed property definition on the command line
    PropError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::GuestError(e) => write!(f, "Guest error: {}", e),
            CliError::PropError(s) => write!(f, "Property definition error: {}", s),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::GuestError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GuestError> for CliError {
    fn from(err: GuestError) -> Self {
        CliError::GuestError(err)
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
