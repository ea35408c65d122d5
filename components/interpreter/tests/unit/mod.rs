//! Unit tests for the foreign read machinery

use core_types::{ErrorKind, Value};
use interpreter::{
    DeoptSink, ForeignInvocation, ForeignReadSite, ReadState, RecordingDeoptSink, SlotCache,
};
use object_model::{DynamicObject, ShapeRegistry};
use std::sync::Arc;

fn key(name: &str) -> [Value; 1] {
    [Value::Str(name.to_string())]
}

// ============================================================================
// Deopt Signalling Tests
// ============================================================================

#[test]
fn test_invalidate_fires_once_on_degradation() {
    let registry = ShapeRegistry::new();
    let mut obj = DynamicObject::new(&registry);
    obj.define_property(&registry, "a", Value::Smi(1));
    obj.define_property(&registry, "b", Value::Smi(2));

    let sink = Arc::new(RecordingDeoptSink::new());
    let site = ForeignReadSite::with_deopt_sink(sink.clone());

    let read_a = key("a");
    let read_b = key("b");
    site.execute(&ForeignInvocation::new(&obj, &read_a)).unwrap();
    assert_eq!(sink.name_mismatches(), 0);

    site.execute(&ForeignInvocation::new(&obj, &read_b)).unwrap();
    assert_eq!(sink.name_mismatches(), 1);

    // Further mismatching reads run generically without new signals.
    site.execute(&ForeignInvocation::new(&obj, &read_a)).unwrap();
    site.execute(&ForeignInvocation::new(&obj, &read_b)).unwrap();
    assert_eq!(sink.name_mismatches(), 1);
}

#[test]
fn test_no_signal_without_mismatch() {
    let registry = ShapeRegistry::new();
    let mut obj = DynamicObject::new(&registry);
    obj.define_property(&registry, "a", Value::Smi(1));

    let sink = Arc::new(RecordingDeoptSink::new());
    let site = ForeignReadSite::with_deopt_sink(sink.clone());

    let read_a = key("a");
    for _ in 0..100 {
        site.execute(&ForeignInvocation::new(&obj, &read_a)).unwrap();
    }
    assert_eq!(sink.name_mismatches(), 0);
}

// ============================================================================
// Shape Change Under Monomorphic Specialization
// ============================================================================

#[test]
fn test_receiver_shape_change_stays_monomorphic() {
    let registry = ShapeRegistry::new();
    let mut obj = DynamicObject::new(&registry);
    obj.define_property(&registry, "a", Value::Smi(1));

    let site = ForeignReadSite::new();
    let read_a = key("a");
    site.execute(&ForeignInvocation::new(&obj, &read_a)).unwrap();

    // A layout change on the receiver is the slot cache's problem, not a
    // name mismatch; the site keeps its specialization.
    obj.define_property(&registry, "extra", Value::Smi(9));
    let result = site.execute(&ForeignInvocation::new(&obj, &read_a)).unwrap();
    assert_eq!(result, Value::Smi(1));
    assert_eq!(
        site.state(),
        ReadState::Monomorphic {
            cached_name: "a".to_string()
        }
    );
    assert_eq!(site.stats().slot_refills, 2);
}

#[test]
fn test_different_receivers_through_one_site() {
    let registry = ShapeRegistry::new();
    let mut small = DynamicObject::new(&registry);
    small.define_property(&registry, "v", Value::Smi(1));
    let mut big = DynamicObject::new(&registry);
    big.define_property(&registry, "pad", Value::Null);
    big.define_property(&registry, "v", Value::Smi(2));

    let site = ForeignReadSite::new();
    let read_v = key("v");
    assert_eq!(
        site.execute(&ForeignInvocation::new(&small, &read_v)).unwrap(),
        Value::Smi(1)
    );
    assert_eq!(
        site.execute(&ForeignInvocation::new(&big, &read_v)).unwrap(),
        Value::Smi(2)
    );
    assert!(matches!(site.state(), ReadState::Monomorphic { .. }));
}

// ============================================================================
// Concurrency Tests
// ============================================================================

#[test]
fn test_racing_mismatches_signal_once() {
    let registry = ShapeRegistry::new();
    let mut obj = DynamicObject::new(&registry);
    for (name, v) in [("a", 1), ("b", 2), ("c", 3), ("d", 4)] {
        obj.define_property(&registry, name, Value::Smi(v));
    }
    let obj = Arc::new(obj);

    let sink = Arc::new(RecordingDeoptSink::new());
    let site = Arc::new(ForeignReadSite::with_deopt_sink(sink.clone()));

    let handles: Vec<_> = ["a", "b", "c", "d"]
        .into_iter()
        .map(|name| {
            let site = site.clone();
            let obj = obj.clone();
            let name = name.to_string();
            std::thread::spawn(move || {
                let args = [Value::Str(name)];
                for _ in 0..1000 {
                    site.execute(&ForeignInvocation::new(&obj, &args)).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // Racing first calls elect one monomorphic name; the losers force the
    // single permanent degradation.
    assert_eq!(site.state(), ReadState::Polymorphic);
    assert_eq!(sink.name_mismatches(), 1);
    assert_eq!(site.stats().transitions, 1);
}

// ============================================================================
// SlotCache Tests
// ============================================================================

#[test]
fn test_slot_cache_is_shareable_across_threads() {
    let registry = ShapeRegistry::new();
    let mut obj = DynamicObject::new(&registry);
    obj.define_property(&registry, "n", Value::Smi(5));
    let obj = Arc::new(obj);
    let cache = Arc::new(SlotCache::new("n"));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cache = cache.clone();
            let obj = obj.clone();
            std::thread::spawn(move || {
                for _ in 0..1000 {
                    assert_eq!(cache.read(&obj).unwrap(), Value::Smi(5));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

// ============================================================================
// Error Propagation Tests
// ============================================================================

#[test]
fn test_missing_property_error_carries_name() {
    let registry = ShapeRegistry::new();
    let obj = DynamicObject::new(&registry);
    let site = ForeignReadSite::new();

    let args = key("velocity");
    let err = site.execute(&ForeignInvocation::new(&obj, &args)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::PropertyNotFound);
    assert!(err.message.contains("velocity"));
}

#[test]
fn test_dyn_sink_usable_through_trait_object() {
    let sink: Arc<dyn DeoptSink> = Arc::new(RecordingDeoptSink::new());
    let _site = ForeignReadSite::with_deopt_sink(sink);
}
