//! Guest error types and error handling.
//!
//! Errors produced while servicing a foreign access are classified by
//! [`ErrorKind`] and carried as a [`GuestError`] with a human-readable
//! message. Property-store failures are passed through unmodified as
//! `InternalError`.

use thiserror::Error;

/// The kind of guest error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The requested property does not exist on the receiver's current shape
    #[error("PropertyNotFound")]
    PropertyNotFound,
    /// Malformed access (e.g. lookup key is not a string)
    #[error("TypeError")]
    TypeError,
    /// Internal runtime error (malformed shape, stale accessor)
    #[error("InternalError")]
    InternalError,
}

/// A guest error with kind and message.
///
/// This struct represents a guest-visible failure that propagates to the
/// caller of a foreign access.
///
/// # Examples
///
/// ```
/// use core_types::{GuestError, ErrorKind};
///
/// let error = GuestError::property_not_found("speed");
/// assert_eq!(error.kind, ErrorKind::PropertyNotFound);
/// assert!(error.message.contains("speed"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct GuestError {
    /// The classification of this error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl GuestError {
    /// Error for a property name absent from the receiver's current shape.
    pub fn property_not_found(name: &str) -> Self {
        GuestError {
            kind: ErrorKind::PropertyNotFound,
            message: format!("no property named '{}'", name),
        }
    }

    /// Error for a malformed foreign access.
    pub fn type_error(message: impl Into<String>) -> Self {
        GuestError {
            kind: ErrorKind::TypeError,
            message: message.into(),
        }
    }

    /// Error originating inside the runtime itself.
    pub fn internal(message: impl Into<String>) -> Self {
        GuestError {
            kind: ErrorKind::InternalError,
            message: message.into(),
        }
    }
}

/// Result type for operations that can fail with a guest error.
pub type GuestResult<T> = Result<T, GuestError>;
