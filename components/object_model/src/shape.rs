//! Shape system for optimizing guest object property access.
//!
//! Shapes track the layout of an object (which property names live at which
//! offsets) and are shared between objects that added the same properties in
//! the same order. A shape is immutable once created; adding a property
//! transitions the object to a successor shape obtained from the registry.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Opaque identity of a shape.
///
/// Two objects have the same `ShapeId` exactly when they share a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(u32);

impl ShapeId {
    /// The raw numeric identity, for callers that need to pack shape ids
    /// into cache words. The value carries no meaning beyond equality.
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// A property descriptor within a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescriptor {
    /// Name of the property
    pub name: String,
    /// Offset in the owning object's properties vector
    pub offset: u32,
}

/// Immutable layout description for guest objects.
///
/// Objects holding the same `Shape` store their property values at the
/// offsets the shape describes, so a name lookup resolves to a vector index
/// that stays valid for every object of this shape.
#[derive(Debug)]
pub struct Shape {
    id: ShapeId,
    properties: Vec<PropertyDescriptor>,
}

impl Shape {
    /// Returns this shape's identity.
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Looks up a property by name and returns its offset.
    ///
    /// # Returns
    ///
    /// `Some(offset)` if the property exists in this layout, `None` otherwise.
    pub fn lookup(&self, name: &str) -> Option<u32> {
        self.properties
            .iter()
            .find(|prop| prop.name == name)
            .map(|prop| prop.offset)
    }

    /// Number of properties in this layout.
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Iterates the property descriptors in offset order.
    pub fn properties(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.properties.iter()
    }
}

struct RegistryInner {
    next_id: u32,
    root: Arc<Shape>,
    /// Memoized transitions: (parent shape, added name) -> successor shape
    transitions: HashMap<(ShapeId, String), Arc<Shape>>,
}

/// Shared transition table for shapes.
///
/// The registry owns the empty root shape and memoizes every
/// parent-plus-property transition, so two objects that define the same
/// properties in the same order end up with the *same* `Arc<Shape>` (and
/// therefore the same [`ShapeId`]).
///
/// Reads vastly outnumber transitions; the table is guarded by a
/// `parking_lot::RwLock`.
///
/// # Example
///
/// ```
/// use object_model::ShapeRegistry;
///
/// let registry = ShapeRegistry::new();
/// let root = registry.root();
/// let with_x = registry.transition(&root, "x");
/// let with_x_again = registry.transition(&root, "x");
/// assert_eq!(with_x.id(), with_x_again.id());
/// assert_eq!(with_x.lookup("x"), Some(0));
/// ```
pub struct ShapeRegistry {
    inner: RwLock<RegistryInner>,
}

impl ShapeRegistry {
    /// Creates a registry containing only the empty root shape.
    pub fn new() -> Self {
        let root = Arc::new(Shape {
            id: ShapeId(0),
            properties: Vec::new(),
        });
        ShapeRegistry {
            inner: RwLock::new(RegistryInner {
                next_id: 1,
                root,
                transitions: HashMap::new(),
            }),
        }
    }

    /// Returns the empty root shape.
    pub fn root(&self) -> Arc<Shape> {
        self.inner.read().root.clone()
    }

    /// Returns the successor of `parent` with `name` appended.
    ///
    /// The transition is memoized: repeating the same transition from the
    /// same parent yields the identical shared shape. The new property is
    /// assigned the next free offset.
    pub fn transition(&self, parent: &Arc<Shape>, name: &str) -> Arc<Shape> {
        let key = (parent.id(), name.to_string());
        if let Some(existing) = self.inner.read().transitions.get(&key) {
            return existing.clone();
        }

        let mut inner = self.inner.write();
        // A racing writer may have installed the transition in between.
        if let Some(existing) = inner.transitions.get(&key) {
            return existing.clone();
        }

        let offset = parent.property_count() as u32;
        let mut properties: Vec<PropertyDescriptor> = parent.properties.clone();
        properties.push(PropertyDescriptor {
            name: name.to_string(),
            offset,
        });

        let id = ShapeId(inner.next_id);
        inner.next_id += 1;
        let shape = Arc::new(Shape { id, properties });
        inner.transitions.insert(key, shape.clone());
        shape
    }
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
