//! Shape-keyed slot cache for a single property name.
//!
//! The specialized tier of a read site trusts this cache as its compiled
//! accessor: it remembers where the cached name lived on the last shape it
//! saw, so repeated reads of receivers with that shape are a single atomic
//! load plus an offset read. A receiver with a different shape triggers a
//! full resolution through the property store and republishes the entry.
//!
//! The cached `(shape, offset)` pair is packed into one `AtomicU64`, so
//! hits and refills are lock-free and a reader can never observe a torn
//! entry.

use core_types::{GuestError, GuestResult, Value};
use object_model::{DynamicObject, SlotAccessor};
use std::sync::atomic::{AtomicU64, Ordering};

/// Sentinel for "nothing cached yet". Shape ids are 32-bit, so the high
/// word of a real entry is never all-ones.
const EMPTY: u64 = u64::MAX;

fn pack(accessor: &SlotAccessor) -> u64 {
    ((accessor.shape.raw() as u64) << 32) | accessor.offset as u64
}

fn unpack(entry: u64) -> (u32, u32) {
    ((entry >> 32) as u32, entry as u32)
}

/// A per-name accessor cache keyed by receiver shape.
///
/// Owned by the monomorphic tier of a [`ForeignReadSite`]; the name is
/// fixed at construction and never compared here. The cache only answers
/// "where does that name live on this shape".
///
/// [`ForeignReadSite`]: crate::ForeignReadSite
///
/// # Example
///
/// ```
/// use interpreter::SlotCache;
/// use object_model::{DynamicObject, ShapeRegistry};
/// use core_types::Value;
///
/// let registry = ShapeRegistry::new();
/// let mut obj = DynamicObject::new(&registry);
/// obj.define_property(&registry, "x", Value::Smi(7));
///
/// let cache = SlotCache::new("x");
/// assert_eq!(cache.read(&obj).unwrap(), Value::Smi(7));
/// assert_eq!(cache.read(&obj).unwrap(), Value::Smi(7));
/// assert_eq!(cache.refills(), 1);
/// ```
#[derive(Debug)]
pub struct SlotCache {
    name: String,
    entry: AtomicU64,
    refills: AtomicU64,
}

impl SlotCache {
    /// Creates an empty cache for `name`.
    pub fn new(name: &str) -> Self {
        SlotCache {
            name: name.to_string(),
            entry: AtomicU64::new(EMPTY),
            refills: AtomicU64::new(0),
        }
    }

    /// The property name this cache resolves.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reads the cached name off `receiver`.
    ///
    /// Fast path: the receiver's shape matches the cached entry and the
    /// value is read directly at the cached offset. Otherwise the name is
    /// re-resolved against the receiver's current shape and the entry is
    /// republished.
    ///
    /// # Errors
    ///
    /// `PropertyNotFound` if the name is absent from the receiver's current
    /// shape.
    pub fn read(&self, receiver: &DynamicObject) -> GuestResult<Value> {
        let shape = receiver.shape_id();
        let entry = self.entry.load(Ordering::Acquire);
        if entry != EMPTY {
            let (cached_shape, offset) = unpack(entry);
            if cached_shape == shape.raw() {
                // Shapes are equal, so the receiver's own id names the same
                // layout the entry was resolved against.
                return receiver.read(&SlotAccessor { shape, offset });
            }
        }

        match receiver.resolve(&self.name) {
            Some(accessor) => {
                self.entry.store(pack(&accessor), Ordering::Release);
                self.refills.fetch_add(1, Ordering::Relaxed);
                receiver.read(&accessor)
            }
            None => Err(GuestError::property_not_found(&self.name)),
        }
    }

    /// Number of full resolutions performed so far.
    pub fn refills(&self) -> u64 {
        self.refills.load(Ordering::Relaxed)
    }
}
