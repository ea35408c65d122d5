//! Foreign-call invocation channel.
//!
//! A foreign property read receives its receiver out-of-band from the call
//! mechanism and its lookup key as argument 0 of the argument sequence.
//! Nothing in an invocation outlives the call.

use core_types::{GuestError, GuestResult, Value};
use object_model::DynamicObject;

/// One foreign read invocation: receiver plus argument sequence.
///
/// Argument 0 is always the lookup key. The invocation is ephemeral; call
/// sites never retain it.
pub struct ForeignInvocation<'a> {
    receiver: &'a DynamicObject,
    arguments: &'a [Value],
}

impl<'a> ForeignInvocation<'a> {
    /// Creates an invocation from the receiver and the foreign argument
    /// sequence.
    pub fn new(receiver: &'a DynamicObject, arguments: &'a [Value]) -> Self {
        ForeignInvocation {
            receiver,
            arguments,
        }
    }

    /// The receiver object of this invocation.
    pub fn receiver(&self) -> &'a DynamicObject {
        self.receiver
    }

    /// Extracts the lookup key from argument 0.
    ///
    /// # Errors
    ///
    /// Returns a `TypeError` if the argument sequence is empty or argument 0
    /// is not a string.
    pub fn property_name(&self) -> GuestResult<&'a str> {
        let key = self
            .arguments
            .first()
            .ok_or_else(|| GuestError::type_error("property read expects a lookup key argument"))?;
        key.as_str().ok_or_else(|| {
            GuestError::type_error(format!(
                "lookup key must be a string, got {}",
                key.type_of()
            ))
        })
    }
}
