//! Probe harness: one receiver, one read site.

use core_types::{GuestResult, Value};
use interpreter::{ForeignInvocation, ForeignReadSite, ReadState, RecordingDeoptSink, StatsSnapshot};
use object_model::{DynamicObject, ShapeRegistry};
use std::sync::Arc;

use crate::error::{CliError, CliResult};

/// A receiver object plus a single foreign read site driven against it.
pub struct Probe {
    registry: ShapeRegistry,
    receiver: DynamicObject,
    site: ForeignReadSite,
    sink: Arc<RecordingDeoptSink>,
}

impl Probe {
    /// Creates a probe with an empty receiver and a fresh site.
    pub fn new() -> Self {
        let registry = ShapeRegistry::new();
        let receiver = DynamicObject::new(&registry);
        let sink = Arc::new(RecordingDeoptSink::new());
        let site = ForeignReadSite::with_deopt_sink(sink.clone());
        Probe {
            registry,
            receiver,
            site,
            sink,
        }
    }

    /// Defines a property on the receiver from a `name=value` string.
    pub fn define_from_spec(&mut self, spec: &str) -> CliResult<()> {
        let (name, raw) = spec
            .split_once('=')
            .ok_or_else(|| CliError::PropError(format!("expected NAME=VALUE, got '{}'", spec)))?;
        if name.is_empty() {
            return Err(CliError::PropError(format!("empty name in '{}'", spec)));
        }
        self.receiver
            .define_property(&self.registry, name, parse_value(raw));
        Ok(())
    }

    /// Reads `name` through the probe's call site.
    pub fn read(&self, name: &str) -> GuestResult<Value> {
        let args = [Value::Str(name.to_string())];
        self.site
            .execute(&ForeignInvocation::new(&self.receiver, &args))
    }

    /// The site's current specialization state.
    pub fn state(&self) -> ReadState {
        self.site.state()
    }

    /// The site's counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.site.stats()
    }

    /// Number of invalidation signals the site has issued.
    pub fn invalidations(&self) -> u64 {
        self.sink.name_mismatches()
    }
}

impl Default for Probe {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a command-line value literal into a guest value.
fn parse_value(raw: &str) -> Value {
    match raw {
        "true" => return Value::Boolean(true),
        "false" => return Value::Boolean(false),
        "null" => return Value::Null,
        "undefined" => return Value::Undefined,
        _ => {}
    }
    if let Ok(n) = raw.parse::<i32>() {
        return Value::Smi(n);
    }
    if let Ok(n) = raw.parse::<f64>() {
        return Value::Double(n);
    }
    Value::Str(raw.to_string())
}
