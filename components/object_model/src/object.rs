//! Guest object representation.
//!
//! Provides the `DynamicObject` type with shape-based property storage and
//! the slot accessor capability the foreign-access layer reads through.

use core_types::{GuestError, GuestResult, Value};
use std::sync::Arc;

use crate::shape::{Shape, ShapeId, ShapeRegistry};

/// A resolved property location on a specific shape.
///
/// An accessor is only valid against receivers whose current shape matches
/// the shape it was resolved against; [`DynamicObject::read`] rejects stale
/// accessors instead of reading a wrong slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotAccessor {
    /// Shape the accessor was resolved against
    pub shape: ShapeId,
    /// Offset of the property in the properties vector
    pub offset: u32,
}

/// Guest object with shape-based property storage.
///
/// Property values live in a flat vector; the object's current shape maps
/// names to offsets into that vector. Defining a new property transitions
/// the object to a successor shape from the registry.
///
/// # Example
///
/// ```
/// use object_model::{DynamicObject, ShapeRegistry};
/// use core_types::Value;
///
/// let registry = ShapeRegistry::new();
/// let mut obj = DynamicObject::new(&registry);
/// obj.define_property(&registry, "x", Value::Smi(10));
/// assert_eq!(obj.get("x"), Some(Value::Smi(10)));
/// assert_eq!(obj.get("missing"), None);
/// ```
pub struct DynamicObject {
    /// The shape describing this object's layout
    shape: Arc<Shape>,
    /// Property values, indexed by shape offsets
    properties: Vec<Value>,
}

impl DynamicObject {
    /// Creates an empty object with the registry's root shape.
    pub fn new(registry: &ShapeRegistry) -> Self {
        DynamicObject {
            shape: registry.root(),
            properties: Vec::new(),
        }
    }

    /// Returns the identity of this object's current shape.
    pub fn shape_id(&self) -> ShapeId {
        self.shape.id()
    }

    /// Returns this object's current shape.
    pub fn shape(&self) -> &Arc<Shape> {
        &self.shape
    }

    /// Defines or overwrites a property.
    ///
    /// Overwriting an existing property stores in place; defining a new one
    /// transitions this object to the successor shape for `name` and appends
    /// the value at the new offset.
    pub fn define_property(&mut self, registry: &ShapeRegistry, name: &str, value: Value) {
        match self.shape.lookup(name) {
            Some(offset) => {
                self.properties[offset as usize] = value;
            }
            None => {
                self.shape = registry.transition(&self.shape, name);
                self.properties.push(value);
            }
        }
    }

    /// Resolves `name` against this object's *current* shape.
    ///
    /// This is the full name-to-slot lookup. Returns `None` if the name is
    /// absent from the layout.
    pub fn resolve(&self, name: &str) -> Option<SlotAccessor> {
        self.shape.lookup(name).map(|offset| SlotAccessor {
            shape: self.shape.id(),
            offset,
        })
    }

    /// Reads the value behind a previously resolved accessor.
    ///
    /// # Errors
    ///
    /// Returns an `InternalError` if the accessor was resolved against a
    /// different shape than this object currently has, or points outside
    /// the property storage.
    pub fn read(&self, accessor: &SlotAccessor) -> GuestResult<Value> {
        if accessor.shape != self.shape.id() {
            return Err(GuestError::internal(format!(
                "stale slot accessor: shape {:?} does not match receiver shape {:?}",
                accessor.shape,
                self.shape.id()
            )));
        }
        self.properties
            .get(accessor.offset as usize)
            .cloned()
            .ok_or_else(|| {
                GuestError::internal(format!(
                    "slot offset {} out of bounds for shape {:?}",
                    accessor.offset,
                    self.shape.id()
                ))
            })
    }

    /// Convenience lookup: resolve then read.
    pub fn get(&self, name: &str) -> Option<Value> {
        let accessor = self.resolve(name)?;
        self.read(&accessor).ok()
    }
}
