//! Unit tests for the shape-based property store

use core_types::{ErrorKind, Value};
use object_model::{DynamicObject, ShapeRegistry};

// ============================================================================
// Shape Tests
// ============================================================================

#[test]
fn test_shape_transitions_share_layouts() {
    let registry = ShapeRegistry::new();
    let root = registry.root();

    let with_a = registry.transition(&root, "a");
    let with_ab = registry.transition(&with_a, "b");

    // Replaying the same history reaches the same shapes.
    let with_a2 = registry.transition(&root, "a");
    let with_ab2 = registry.transition(&with_a2, "b");

    assert_eq!(with_a.id(), with_a2.id());
    assert_eq!(with_ab.id(), with_ab2.id());
}

#[test]
fn test_shape_lookup_offsets() {
    let registry = ShapeRegistry::new();
    let root = registry.root();
    let shape = registry.transition(&registry.transition(&root, "x"), "y");

    assert_eq!(shape.lookup("x"), Some(0));
    assert_eq!(shape.lookup("y"), Some(1));
    assert_eq!(shape.lookup("z"), None);
}

#[test]
fn test_property_iteration_order() {
    let registry = ShapeRegistry::new();
    let root = registry.root();
    let shape = registry.transition(&registry.transition(&root, "x"), "y");

    let names: Vec<&str> = shape.properties().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["x", "y"]);
}

// ============================================================================
// DynamicObject Tests
// ============================================================================

#[test]
fn test_object_property_roundtrip() {
    let registry = ShapeRegistry::new();
    let mut obj = DynamicObject::new(&registry);

    obj.define_property(&registry, "x", Value::Smi(10));
    obj.define_property(&registry, "y", Value::Str("hello".to_string()));
    obj.define_property(&registry, "z", Value::Boolean(true));

    assert_eq!(obj.get("x"), Some(Value::Smi(10)));
    assert_eq!(obj.get("y"), Some(Value::Str("hello".to_string())));
    assert_eq!(obj.get("z"), Some(Value::Boolean(true)));
}

#[test]
fn test_resolve_missing_property() {
    let registry = ShapeRegistry::new();
    let obj = DynamicObject::new(&registry);
    assert!(obj.resolve("missing").is_none());
}

#[test]
fn test_accessor_valid_across_objects_of_same_shape() {
    let registry = ShapeRegistry::new();
    let mut a = DynamicObject::new(&registry);
    let mut b = DynamicObject::new(&registry);
    a.define_property(&registry, "v", Value::Smi(1));
    b.define_property(&registry, "v", Value::Smi(2));

    // Same shape, so an accessor resolved on one object reads the other.
    let accessor = a.resolve("v").unwrap();
    assert_eq!(b.read(&accessor).unwrap(), Value::Smi(2));
}

#[test]
fn test_stale_accessor_is_an_internal_error() {
    let registry = ShapeRegistry::new();
    let mut obj = DynamicObject::new(&registry);
    obj.define_property(&registry, "x", Value::Smi(1));
    let accessor = obj.resolve("x").unwrap();

    obj.define_property(&registry, "y", Value::Smi(2));
    let err = obj.read(&accessor).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InternalError);
}
