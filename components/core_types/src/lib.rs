//! Core guest value types and error handling.
//!
//! This crate provides the foundational types for the Sable foreign-access
//! runtime: the tagged guest value representation and the error taxonomy
//! surfaced to guest programs.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of guest values
//! - [`GuestError`] - Errors visible to guest programs
//! - [`ErrorKind`] - Classification of guest errors
//!
//! # Examples
//!
//! ```
//! use core_types::{Value, GuestError, ErrorKind};
//!
//! let num = Value::Smi(42);
//! assert!(num.is_truthy());
//! assert_eq!(num.type_of(), "number");
//!
//! let error = GuestError::property_not_found("x");
//! assert_eq!(error.kind, ErrorKind::PropertyNotFound);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod value;

pub use error::{ErrorKind, GuestError, GuestResult};
pub use value::Value;
