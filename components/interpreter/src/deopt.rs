//! Host deoptimization signalling.
//!
//! When a specialized read site detects that its speculation no longer
//! holds, the compiled fast path for that site must not be re-entered. The
//! site signals this through an injected [`DeoptSink`] exactly once, before
//! it publishes its replacement specialization. The host decides what
//! invalidation actually means; an interpreter-only host can ignore it.

use std::sync::atomic::{AtomicU64, Ordering};

/// Reason a compiled fast path was invalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeoptReason {
    /// The lookup key differed from the name the site specialized on
    NameMismatch,
}

/// Host callback for invalidating a call site's compiled fast path.
///
/// Implementations must tolerate being called from whichever thread detects
/// the failed speculation.
pub trait DeoptSink: Send + Sync {
    /// Invalidate the issuing call site's compiled code.
    ///
    /// Called exactly once per site, before the replacement specialization
    /// becomes visible to other threads.
    fn invalidate(&self, reason: DeoptReason);
}

/// A sink for hosts without compiled code; ignores all signals.
#[derive(Debug, Default)]
pub struct NullDeoptSink;

impl DeoptSink for NullDeoptSink {
    fn invalidate(&self, _reason: DeoptReason) {}
}

/// A sink that counts signals, for tests and diagnostics.
#[derive(Debug, Default)]
pub struct RecordingDeoptSink {
    name_mismatches: AtomicU64,
}

impl RecordingDeoptSink {
    /// Creates a sink with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `NameMismatch` invalidations observed.
    pub fn name_mismatches(&self) -> u64 {
        self.name_mismatches.load(Ordering::Relaxed)
    }
}

impl DeoptSink for RecordingDeoptSink {
    fn invalidate(&self, reason: DeoptReason) {
        match reason {
            DeoptReason::NameMismatch => {
                self.name_mismatches.fetch_add(1, Ordering::Relaxed);
            }
        }
    }
}
