//! Self-specializing foreign property read sites.
//!
//! Each static read location owns one [`ForeignReadSite`]. The site starts
//! with no specialization, builds a monomorphic one from the first lookup
//! key it ever observes, and serves that name through a shape-keyed slot
//! cache for as long as the key stays the same. The first invocation with a
//! different key signals the host to invalidate the compiled fast path,
//! then permanently replaces the specialization with a generic read that
//! re-resolves the key against the receiver's current shape on every call.
//!
//! Transitions are one-directional: `Uninitialized → Monomorphic →
//! Polymorphic`, each step taken at most once for the life of the site.

use core_types::{GuestError, GuestResult, Value};
use std::sync::{Arc, Once, OnceLock};

use crate::deopt::{DeoptReason, DeoptSink, NullDeoptSink};
use crate::foreign_args::ForeignInvocation;
use crate::profile::{SiteStats, StatsSnapshot};
use crate::slot_cache::SlotCache;

/// Externally observable specialization state of a read site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadState {
    /// No invocation has reached the site yet
    Uninitialized,
    /// Specialized to a single lookup key
    Monomorphic {
        /// The key captured on the site's first invocation
        cached_name: String,
    },
    /// Permanently generic; the key is re-resolved on every call
    Polymorphic,
}

/// Specialized tier: reads exactly one name, guarded by the caller.
///
/// The name comparison lives in the owning site; this node only carries the
/// captured name and the compiled accessor built against it.
struct MonomorphicNameRead {
    cache: SlotCache,
}

impl MonomorphicNameRead {
    fn new(name: &str) -> Self {
        MonomorphicNameRead {
            cache: SlotCache::new(name),
        }
    }

    fn cached_name(&self) -> &str {
        self.cache.name()
    }

    fn execute(&self, invocation: &ForeignInvocation) -> GuestResult<Value> {
        self.cache.read(invocation.receiver())
    }
}

/// Generic tier: stateless, resolves the key against the receiver's current
/// shape on every call.
struct PolymorphicNameRead;

impl PolymorphicNameRead {
    fn execute(&self, invocation: &ForeignInvocation) -> GuestResult<Value> {
        let name = invocation.property_name()?;
        let receiver = invocation.receiver();
        match receiver.resolve(name) {
            Some(accessor) => receiver.read(&accessor),
            None => Err(GuestError::property_not_found(name)),
        }
    }
}

/// One static foreign read location.
///
/// The site is the sole owner of its specialization. The hot path is a
/// handful of atomic loads and one string comparison; replacing the
/// specialization is a single-writer publish, so a concurrent reader either
/// sees the old fully constructed specialization or the new one, never a
/// partial state.
///
/// # Example
///
/// ```
/// use interpreter::{ForeignInvocation, ForeignReadSite, ReadState};
/// use object_model::{DynamicObject, ShapeRegistry};
/// use core_types::Value;
///
/// let registry = ShapeRegistry::new();
/// let mut obj = DynamicObject::new(&registry);
/// obj.define_property(&registry, "x", Value::Smi(10));
/// obj.define_property(&registry, "y", Value::Smi(20));
///
/// let site = ForeignReadSite::new();
/// let read_x = [Value::Str("x".to_string())];
/// let read_y = [Value::Str("y".to_string())];
///
/// site.execute(&ForeignInvocation::new(&obj, &read_x)).unwrap();
/// assert!(matches!(site.state(), ReadState::Monomorphic { .. }));
///
/// // A different key permanently degrades the site.
/// site.execute(&ForeignInvocation::new(&obj, &read_y)).unwrap();
/// assert_eq!(site.state(), ReadState::Polymorphic);
/// ```
pub struct ForeignReadSite {
    /// Monomorphic specialization, built lazily from the first observed key
    mono: OnceLock<MonomorphicNameRead>,
    /// One-shot Monomorphic → Polymorphic replacement
    transition: Once,
    poly: PolymorphicNameRead,
    deopt: Arc<dyn DeoptSink>,
    stats: SiteStats,
}

impl ForeignReadSite {
    /// Creates a fresh, uninitialized site with no host attached.
    pub fn new() -> Self {
        Self::with_deopt_sink(Arc::new(NullDeoptSink))
    }

    /// Creates a fresh site that reports invalidations to `sink`.
    pub fn with_deopt_sink(sink: Arc<dyn DeoptSink>) -> Self {
        ForeignReadSite {
            mono: OnceLock::new(),
            transition: Once::new(),
            poly: PolymorphicNameRead,
            deopt: sink,
            stats: SiteStats::new(),
        }
    }

    /// Executes one read through this site's current specialization.
    ///
    /// # Errors
    ///
    /// - `TypeError` if the invocation carries no string lookup key.
    /// - `PropertyNotFound` if the key is absent from the receiver's
    ///   current shape, on either tier.
    pub fn execute(&self, invocation: &ForeignInvocation) -> GuestResult<Value> {
        let name = invocation.property_name()?;

        if self.transition.is_completed() {
            self.stats.record_generic_read();
            return self.poly.execute(invocation);
        }

        let mono = self.mono.get_or_init(|| MonomorphicNameRead::new(name));
        if mono.cached_name() == name {
            self.stats.record_fast_hit();
            return mono.execute(invocation);
        }

        // Specialization mismatch: this site is done speculating on a
        // single name. Tell the host before the replacement is published,
        // exactly once even if several threads race on the detection.
        self.transition.call_once(|| {
            self.deopt.invalidate(DeoptReason::NameMismatch);
            self.stats.record_transition();
        });
        self.stats.record_generic_read();
        self.poly.execute(invocation)
    }

    /// Snapshot of the site's current specialization state.
    ///
    /// `Uninitialized` is only reported for a site that has never executed.
    pub fn state(&self) -> ReadState {
        if self.transition.is_completed() {
            return ReadState::Polymorphic;
        }
        match self.mono.get() {
            Some(mono) => ReadState::Monomorphic {
                cached_name: mono.cached_name().to_string(),
            },
            None => ReadState::Uninitialized,
        }
    }

    /// Point-in-time view of the site's counters.
    pub fn stats(&self) -> StatsSnapshot {
        let slot_refills = self.mono.get().map(|m| m.cache.refills()).unwrap_or(0);
        self.stats.snapshot(slot_refills)
    }
}

impl Default for ForeignReadSite {
    fn default() -> Self {
        Self::new()
    }
}
