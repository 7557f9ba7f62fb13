//! Accessor synthesis.
//!
//! The getter, setter and deleter of a delegation share one traversal: start
//! at the receiver, read every hop, and stop at the object that holds the
//! terminal field. Only the operation applied to that field differs.

use core::fmt;
use std::sync::Arc;

use delegate_core::{AccessError, Deleter, Getter, Object, Property, Setter, Value};
use delegate_path::TraversalSteps;

/// The chain walk shared by all three accessors.
struct Chain {
    steps: TraversalSteps,
}

impl Chain {
    /// Read every hop, starting at the receiver.
    fn terminal_owner(&self, receiver: &Object) -> Result<Value, AccessError> {
        let mut current = Value::Object(receiver.clone());
        for hop in self.steps.hops() {
            current = current.get_attr(hop)?;
        }
        Ok(current)
    }

    /// Walk to the terminal owner and hand it to `tail` with the terminal field name.
    fn apply<T>(
        &self,
        receiver: &Object,
        tail: impl FnOnce(&Value, &str) -> Result<T, AccessError>,
    ) -> Result<T, AccessError> {
        let owner = self.terminal_owner(receiver)?;
        tail(&owner, self.steps.terminal())
    }
}

/// Getter, setter and deleter for one traversal.
///
/// Cloning is cheap; the same triple may be installed under several names.
#[derive(Clone)]
pub struct AccessorTriple {
    /// Reads the terminal field.
    pub get: Getter,
    /// Writes the terminal field.
    pub set: Setter,
    /// Deletes the terminal field.
    pub delete: Deleter,
    chain: Arc<Chain>,
}

impl AccessorTriple {
    /// The steps the accessors walk.
    pub fn steps(&self) -> &TraversalSteps {
        &self.chain.steps
    }

    /// Package the accessors as a property documented with its path.
    pub fn into_property(self) -> Property {
        let doc = format!("delegates to {}", self.chain.steps);
        Property::from_parts(Some(self.get), Some(self.set), Some(self.delete)).with_doc(doc)
    }
}

impl fmt::Debug for AccessorTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessorTriple")
            .field("steps", &self.chain.steps.to_string())
            .finish_non_exhaustive()
    }
}

/// Build the three accessors for `steps`.
///
/// Never fails: missing links are reported by the accessors when they run.
pub fn synthesize(steps: TraversalSteps) -> AccessorTriple {
    crate::trace!(path = %steps, "synthesizing accessors");
    let chain = Arc::new(Chain { steps });

    let get: Getter = {
        let chain = Arc::clone(&chain);
        Arc::new(move |this: &Object| {
            crate::trace!(path = %chain.steps, "delegated get");
            chain.apply(this, |owner, field| owner.get_attr(field))
        })
    };

    let set: Setter = {
        let chain = Arc::clone(&chain);
        Arc::new(move |this: &Object, value: Value| {
            crate::trace!(path = %chain.steps, "delegated set");
            chain.apply(this, move |owner, field| owner.set_attr(field, value))
        })
    };

    let delete: Deleter = {
        let chain = Arc::clone(&chain);
        Arc::new(move |this: &Object| {
            crate::trace!(path = %chain.steps, "delegated delete");
            chain.apply(this, |owner, field| owner.del_attr(field))
        })
    };

    AccessorTriple {
        get,
        set,
        delete,
        chain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delegate_core::Class;
    use delegate_path::resolve;

    fn nested() -> (Object, Object) {
        let inner = Class::builder("Inner").field("value").build();
        let outer = Class::builder("Outer").field("inner").build();
        let inner = inner.construct([1]).unwrap();
        let outer = outer.construct([inner.clone()]).unwrap();
        (outer, inner)
    }

    #[test]
    fn shared_walk_different_tails() {
        let (outer, inner) = nested();
        let triple = synthesize(resolve("inner", "value").unwrap());

        assert_eq!((triple.get)(&outer).unwrap(), Value::Int(1));
        (triple.set)(&outer, Value::Int(2)).unwrap();
        assert_eq!(inner.get_attr("value").unwrap(), Value::Int(2));
        (triple.delete)(&outer).unwrap();
        assert!(inner.get_field("value").is_none());
    }

    #[test]
    fn missing_hop_fails_at_call_time() {
        let (outer, _inner) = nested();
        // synthesis does not look at any object
        let triple = synthesize(resolve("inner.nowhere", "value").unwrap());
        let err = (triple.get)(&outer).unwrap_err();
        let missing = err.as_missing().unwrap();
        assert_eq!(missing.type_name, "Inner");
        assert_eq!(missing.attribute, "nowhere");
    }

    #[test]
    fn property_doc_names_the_path() {
        let triple = synthesize(resolve("kitchen.fridge", "brand").unwrap());
        let property = triple.into_property();
        assert_eq!(property.doc(), Some("delegates to self.kitchen.fridge.brand"));
        assert!(property.is_readable() && property.is_writable() && property.is_deletable());
    }
}
