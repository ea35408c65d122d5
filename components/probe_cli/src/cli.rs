//! Command line argument definitions

use clap::Parser;

/// Drive a foreign read site and watch it specialize.
///
/// The receiver object is built from `--prop` definitions; the positional
/// arguments are the property names read through one call site, in order.
#[derive(Parser, Debug)]
#[command(name = "sable-probe", version, about)]
pub struct Cli {
    /// Property definition, name=value (repeatable).
    ///
    /// Values parse as integer, float, true/false, null, undefined, or
    /// fall back to a string.
    #[arg(long = "prop", value_name = "NAME=VALUE")]
    pub props: Vec<String>,

    /// Suppress the per-read site state lines
    #[arg(long)]
    pub quiet: bool,

    /// Names to read through the call site, in order
    #[arg(value_name = "NAME", required = true)]
    pub reads: Vec<String>,
}
