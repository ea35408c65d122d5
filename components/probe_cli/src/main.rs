//! Sable foreign read probe
//!
//! Entry point for the diagnostic CLI. Builds a receiver from --prop
//! definitions, drives one read site through the requested names and
//! prints results and specialization state.

use clap::Parser as ClapParser;
use interpreter::ReadState;
use probe_cli::{Cli, Probe};

fn format_state(state: &ReadState) -> String {
    match state {
        ReadState::Uninitialized => "uninitialized".to_string(),
        ReadState::Monomorphic { cached_name } => format!("monomorphic({})", cached_name),
        ReadState::Polymorphic => "polymorphic".to_string(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut probe = Probe::new();
    for spec in &cli.props {
        probe.define_from_spec(spec)?;
    }

    for name in &cli.reads {
        match probe.read(name) {
            Ok(value) => println!("{} = {}", name, value),
            Err(e) => println!("{} ! {}", name, e),
        }
        if !cli.quiet {
            println!("  site: {}", format_state(&probe.state()));
        }
    }

    let stats = probe.stats();
    println!(
        "reads: {} fast / {} generic, slot refills: {}, invalidations: {}",
        stats.fast_hits,
        stats.generic_reads,
        stats.slot_refills,
        probe.invalidations()
    );

    Ok(())
}
