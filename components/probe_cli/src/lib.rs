//! Foreign read probe CLI library
//!
//! Provides the Probe struct and supporting modules for the sable-probe
//! diagnostic binary: build a receiver object from the command line, drive
//! a single read site through a sequence of lookups, and watch the site
//! specialize and degrade.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod probe;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use probe::Probe;
