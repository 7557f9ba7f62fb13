//! Property descriptors.
//!
//! A [`Property`] bound in a class member table takes precedence over any
//! instance field of the same name: reads, assignments and deletions of that
//! name go through its procedures.

use core::fmt;
use std::sync::Arc;

use crate::{AccessError, MissingAttributeError, Object, Value};

/// Read procedure of a property.
pub type Getter = Arc<dyn Fn(&Object) -> Result<Value, AccessError> + Send + Sync>;

/// Write procedure of a property.
pub type Setter = Arc<dyn Fn(&Object, Value) -> Result<(), AccessError> + Send + Sync>;

/// Delete procedure of a property.
pub type Deleter = Arc<dyn Fn(&Object) -> Result<(), AccessError> + Send + Sync>;

/// A descriptor made of up to three procedures.
#[derive(Clone, Default)]
pub struct Property {
    fget: Option<Getter>,
    fset: Option<Setter>,
    fdel: Option<Deleter>,
    doc: Option<String>,
}

impl Property {
    /// A property with no procedures; add them with the builder methods.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a property from already-shared procedures.
    pub fn from_parts(fget: Option<Getter>, fset: Option<Setter>, fdel: Option<Deleter>) -> Self {
        Self {
            fget,
            fset,
            fdel,
            doc: None,
        }
    }

    /// Set the read procedure.
    pub fn getter<F>(mut self, f: F) -> Self
    where
        F: Fn(&Object) -> Result<Value, AccessError> + Send + Sync + 'static,
    {
        self.fget = Some(Arc::new(f));
        self
    }

    /// Set the write procedure.
    pub fn setter<F>(mut self, f: F) -> Self
    where
        F: Fn(&Object, Value) -> Result<(), AccessError> + Send + Sync + 'static,
    {
        self.fset = Some(Arc::new(f));
        self
    }

    /// Set the delete procedure.
    pub fn deleter<F>(mut self, f: F) -> Self
    where
        F: Fn(&Object) -> Result<(), AccessError> + Send + Sync + 'static,
    {
        self.fdel = Some(Arc::new(f));
        self
    }

    /// Attach documentation.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// The documentation, if any.
    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// True if the property can be read.
    pub fn is_readable(&self) -> bool {
        self.fget.is_some()
    }

    /// True if the property can be assigned.
    pub fn is_writable(&self) -> bool {
        self.fset.is_some()
    }

    /// True if the property can be deleted.
    pub fn is_deletable(&self) -> bool {
        self.fdel.is_some()
    }

    /// Run the read procedure. A write-only property reads as missing.
    pub fn get(&self, this: &Object, name: &str) -> Result<Value, AccessError> {
        match &self.fget {
            Some(fget) => fget(this),
            None => Err(MissingAttributeError {
                type_name: this.class().name().to_string(),
                attribute: name.to_string(),
                suggestion: None,
            }
            .into()),
        }
    }

    /// Run the write procedure.
    pub fn set(&self, this: &Object, name: &str, value: Value) -> Result<(), AccessError> {
        match &self.fset {
            Some(fset) => fset(this, value),
            None => Err(AccessError::ReadOnly {
                type_name: this.class().name().to_string(),
                attribute: name.to_string(),
            }),
        }
    }

    /// Run the delete procedure.
    pub fn delete(&self, this: &Object, name: &str) -> Result<(), AccessError> {
        match &self.fdel {
            Some(fdel) => fdel(this),
            None => Err(AccessError::Undeletable {
                type_name: this.class().name().to_string(),
                attribute: name.to_string(),
            }),
        }
    }
}

impl fmt::Debug for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("get", &self.is_readable())
            .field("set", &self.is_writable())
            .field("delete", &self.is_deletable())
            .field("doc", &self.doc)
            .finish()
    }
}
