//! Per-site read statistics.
//!
//! Purely observational counters a host can poll to see how a read site is
//! behaving. Updated with relaxed ordering on the read paths; never drives
//! specialization decisions.

use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counters for one read site.
#[derive(Debug, Default)]
pub struct SiteStats {
    fast_hits: AtomicU64,
    generic_reads: AtomicU64,
    transitions: AtomicU64,
}

impl SiteStats {
    /// Creates zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a read served by the specialized fast path.
    pub fn record_fast_hit(&self) {
        self.fast_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a read served by the generic path.
    pub fn record_generic_read(&self) {
        self.generic_reads.fetch_add(1, Ordering::Relaxed);
    }

    /// Record the (single) specialization replacement.
    pub fn record_transition(&self) {
        self.transitions.fetch_add(1, Ordering::Relaxed);
    }

    /// Takes a point-in-time snapshot. `slot_refills` is supplied by the
    /// owner since the slot cache keeps its own counter.
    pub fn snapshot(&self, slot_refills: u64) -> StatsSnapshot {
        StatsSnapshot {
            fast_hits: self.fast_hits.load(Ordering::Relaxed),
            slot_refills,
            generic_reads: self.generic_reads.load(Ordering::Relaxed),
            transitions: self.transitions.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time view of a site's counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Reads served by the specialized fast path
    pub fast_hits: u64,
    /// Full resolutions performed by the slot cache
    pub slot_refills: u64,
    /// Reads served by the generic path
    pub generic_reads: u64,
    /// Specialization replacements (0 or 1 for any site)
    pub transitions: u64,
}
