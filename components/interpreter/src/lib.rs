//! Self-specializing foreign property reads for the Sable runtime.
//!
//! This crate provides the call-site machinery that resolves a named
//! attribute on a foreign-supplied receiver as fast as a static field
//! access while staying correct when the name observed at the site changes:
//! - A [`ForeignReadSite`] starts uninitialized, specializes itself to the
//!   first lookup key it observes, and permanently degrades to a generic
//!   name-agnostic read on the first mismatch.
//! - A [`SlotCache`] backs the specialized tier with a lock-free
//!   shape-keyed accessor for the cached name.
//! - A [`DeoptSink`] lets the host invalidate compiled code exactly once
//!   when a site degrades.
//!
//! # Example
//!
//! ```
//! use interpreter::{ForeignInvocation, ForeignReadSite, ReadState};
//! use object_model::{DynamicObject, ShapeRegistry};
//! use core_types::Value;
//!
//! let registry = ShapeRegistry::new();
//! let mut obj = DynamicObject::new(&registry);
//! obj.define_property(&registry, "x", Value::Smi(10));
//!
//! let site = ForeignReadSite::new();
//! let args = [Value::Str("x".to_string())];
//! let result = site.execute(&ForeignInvocation::new(&obj, &args)).unwrap();
//! assert_eq!(result, Value::Smi(10));
//! assert_eq!(site.state(), ReadState::Monomorphic { cached_name: "x".to_string() });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod deopt;
pub mod foreign_args;
pub mod foreign_read;
pub mod profile;
pub mod slot_cache;

// Re-export main types at crate root
pub use deopt::{DeoptReason, DeoptSink, NullDeoptSink, RecordingDeoptSink};
pub use foreign_args::ForeignInvocation;
pub use foreign_read::{ForeignReadSite, ReadState};
pub use profile::{SiteStats, StatsSnapshot};
pub use slot_cache::SlotCache;
