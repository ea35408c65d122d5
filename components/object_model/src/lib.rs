//! Shape-based property storage for guest objects.
//!
//! This crate provides the property store the foreign-access layer reads
//! through:
//! - Objects with the same properties added in the same order share a
//!   [`Shape`], enabling offset-based property access instead of hash
//!   table lookups.
//! - A [`ShapeRegistry`] memoizes shape transitions so that layouts are
//!   shared across objects.
//! - [`DynamicObject`] stores property values in a flat vector indexed by
//!   the offsets its current shape describes.
//!
//! # Example
//!
//! ```
//! use object_model::{DynamicObject, ShapeRegistry};
//! use core_types::Value;
//!
//! let registry = ShapeRegistry::new();
//! let mut obj = DynamicObject::new(&registry);
//! obj.define_property(&registry, "x", Value::Smi(10));
//! obj.define_property(&registry, "y", Value::Smi(20));
//!
//! assert_eq!(obj.get("x"), Some(Value::Smi(10)));
//! let accessor = obj.resolve("y").unwrap();
//! assert_eq!(obj.read(&accessor).unwrap(), Value::Smi(20));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod object;
mod shape;

pub use object::{DynamicObject, SlotAccessor};
pub use shape::{PropertyDescriptor, Shape, ShapeId, ShapeRegistry};
