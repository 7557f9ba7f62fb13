use core::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::{AccessError, BoundMethod, Class, Member, MissingAttributeError, Value, suggest};

struct ObjectInner {
    class: Class,
    fields: RwLock<IndexMap<String, Value>>,
}

/// A handle to an instance.
///
/// Clones alias the same instance. Attribute access follows this order:
///
/// 1. a [`Property`](crate::Property) in the class member table,
/// 2. a field stored on the instance,
/// 3. a method (returned bound to this object) or class-level attribute,
/// 4. the default of a declared field.
///
/// Writes and deletions consult only step 1 before touching the instance's
/// own fields. No lock is held while a property or method runs.
#[derive(Clone)]
pub struct Object(Arc<ObjectInner>);

impl Object {
    /// An instance of `class` with no fields set.
    ///
    /// Use [`Class::construct`] to fill declared fields.
    pub fn new(class: &Class) -> Self {
        Object(Arc::new(ObjectInner {
            class: class.clone(),
            fields: RwLock::new(IndexMap::new()),
        }))
    }

    /// The instance's class.
    pub fn class(&self) -> &Class {
        &self.0.class
    }

    /// True if both handles refer to the same instance.
    pub fn ptr_eq(&self, other: &Object) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Read an attribute.
    pub fn get_attr(&self, name: &str) -> Result<Value, AccessError> {
        crate::trace!(class = self.class().name(), attribute = name, "get_attr");
        let member = self.class().member(name);
        if let Some(Member::Property(property)) = &member {
            return property.get(self, name);
        }

        if let Some(value) = self.get_field(name) {
            return Ok(value);
        }

        match member {
            Some(Member::Method(method)) => Ok(Value::Method(BoundMethod::new(self.clone(), method))),
            Some(Member::Attribute(value)) => Ok(value),
            _ => self
                .class()
                .field_default(name)
                .ok_or_else(|| self.missing(name)),
        }
    }

    /// Assign an attribute.
    pub fn set_attr(&self, name: &str, value: impl Into<Value>) -> Result<(), AccessError> {
        let value = value.into();
        crate::trace!(class = self.class().name(), attribute = name, "set_attr");
        if let Some(Member::Property(property)) = self.class().member(name) {
            return property.set(self, name, value);
        }

        self.0.fields.write().insert(name.to_string(), value);
        Ok(())
    }

    /// Delete an attribute.
    pub fn del_attr(&self, name: &str) -> Result<(), AccessError> {
        crate::trace!(class = self.class().name(), attribute = name, "del_attr");
        if let Some(Member::Property(property)) = self.class().member(name) {
            return property.delete(self, name);
        }

        let removed = self.0.fields.write().shift_remove(name);
        match removed {
            Some(_) => Ok(()),
            None => Err(self.missing(name)),
        }
    }

    /// True if reading `name` succeeds. Runs the getter of a property.
    pub fn has_attr(&self, name: &str) -> bool {
        self.get_attr(name).is_ok()
    }

    /// Look up `name` and call it with `args`.
    pub fn call_method(&self, name: &str, args: &[Value]) -> Result<Value, AccessError> {
        self.get_attr(name)?.call(args)
    }

    /// The raw instance field, bypassing the member table.
    pub fn get_field(&self, name: &str) -> Option<Value> {
        self.0.fields.read().get(name).cloned()
    }

    /// Names of the fields stored on the instance.
    pub fn field_names(&self) -> Vec<String> {
        self.0.fields.read().keys().cloned().collect()
    }

    fn missing(&self, name: &str) -> AccessError {
        let fields = self.field_names();
        let members = self.class().member_names();
        let declared = self.class().fields();
        let known = fields
            .iter()
            .chain(members.iter())
            .map(String::as_str)
            .chain(declared);

        MissingAttributeError {
            type_name: self.class().name().to_string(),
            attribute: name.to_string(),
            suggestion: suggest::closest(name, known),
        }
        .into()
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = self.class();
        if class.fields().next().is_none() {
            return write!(f, "<{} object>", class.name());
        }

        // Collect first so no lock is held while nested objects render.
        let fields: Vec<(&str, Option<Value>)> = class
            .fields()
            .map(|name| (name, self.get_field(name)))
            .collect();

        write!(f, "{}(", class.name())?;
        let mut first = true;
        for (name, value) in fields {
            let Some(value) = value else { continue };
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{name}=")?;
            value.write_repr(f)?;
        }
        f.write_str(")")
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Property;

    fn fridge_class() -> Class {
        Class::builder("Fridge")
            .field("brand")
            .method("cool", |_this, _args| Ok(Value::from("-18° C")))
            .build()
    }

    #[test]
    fn instance_field_roundtrip() {
        let fridge = fridge_class().construct(["Bosch"]).unwrap();
        assert_eq!(fridge.get_attr("brand").unwrap(), Value::from("Bosch"));
        fridge.set_attr("brand", "Miele").unwrap();
        assert_eq!(fridge.get_field("brand"), Some(Value::from("Miele")));
    }

    #[test]
    fn methods_come_back_bound() {
        let fridge = fridge_class().construct(["Bosch"]).unwrap();
        let cool = fridge.get_attr("cool").unwrap();
        let bound = cool.as_method().unwrap();
        assert!(bound.receiver().ptr_eq(&fridge));
        assert_eq!(cool.call(&[]).unwrap(), Value::from("-18° C"));
    }

    #[test]
    fn property_beats_instance_field() {
        let class = fridge_class();
        let fridge = class.construct(["Bosch"]).unwrap();
        class.set_member(
            "brand",
            Member::Property(Property::new().getter(|_this| Ok(Value::from("shadowed")))),
        );
        assert_eq!(fridge.get_attr("brand").unwrap(), Value::from("shadowed"));
        // the stored field is still there underneath
        assert_eq!(fridge.get_field("brand"), Some(Value::from("Bosch")));
    }

    #[test]
    fn delete_then_read_is_missing() {
        let fridge = fridge_class().construct(["Bosch"]).unwrap();
        fridge.del_attr("brand").unwrap();
        let err = fridge.get_attr("brand").unwrap_err();
        assert!(err.is_missing());
        assert!(fridge.del_attr("brand").unwrap_err().is_missing());
    }

    #[test]
    fn missing_attribute_suggests_close_name() {
        let fridge = fridge_class().construct(["Bosch"]).unwrap();
        let err = fridge.get_attr("brnad").unwrap_err();
        let missing = err.as_missing().unwrap();
        assert_eq!(missing.type_name, "Fridge");
        #[cfg(feature = "suggestions")]
        assert_eq!(missing.suggestion.as_deref(), Some("brand"));
    }
}
