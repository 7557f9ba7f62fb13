use core::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::{AccessError, Object, Property, Value};

/// Signature of a method body: receiver plus positional arguments.
pub type MethodFn = dyn Fn(&Object, &[Value]) -> Result<Value, AccessError> + Send + Sync;

/// A named method stored in a class member table.
#[derive(Clone)]
pub struct Method {
    name: Arc<str>,
    func: Arc<MethodFn>,
}

impl Method {
    /// Wrap a closure as a method called `name`.
    pub fn new<F>(name: &str, func: F) -> Self
    where
        F: Fn(&Object, &[Value]) -> Result<Value, AccessError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// The method's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke with an explicit receiver.
    pub fn call(&self, this: &Object, args: &[Value]) -> Result<Value, AccessError> {
        (self.func)(this, args)
    }

    pub(crate) fn ptr_eq(&self, other: &Method) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<function {}>", self.name)
    }
}

/// An entry in a class's member table.
#[derive(Clone, Debug)]
pub enum Member {
    /// A method; looking it up through an instance yields a bound method.
    Method(Method),
    /// A class-level value shared by every instance.
    Attribute(Value),
    /// A descriptor that intercepts reads, writes and deletions.
    Property(Property),
}

impl Member {
    /// Short name of the member kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Member::Method(_) => "method",
            Member::Attribute(_) => "attribute",
            Member::Property(_) => "property",
        }
    }

    /// The descriptor, if this member is one.
    pub fn as_property(&self) -> Option<&Property> {
        match self {
            Member::Property(property) => Some(property),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct FieldDecl {
    name: String,
    default: Option<Value>,
}

struct ClassInner {
    name: String,
    fields: Vec<FieldDecl>,
    members: RwLock<IndexMap<String, Member>>,
}

/// A class: declared data fields plus a member table.
///
/// `Class` is a cheap handle; clones share the same member table. The member
/// table may be changed after instances exist, and every instance sees the
/// change on its next attribute access.
#[derive(Clone)]
pub struct Class(Arc<ClassInner>);

impl Class {
    /// Start declaring a class.
    pub fn builder(name: impl Into<String>) -> ClassBuilder {
        ClassBuilder {
            name: name.into(),
            fields: Vec::new(),
            members: IndexMap::new(),
        }
    }

    /// The class name.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Declared data fields, in constructor order.
    pub fn fields(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.fields.iter().map(|field| field.name.as_str())
    }

    pub(crate) fn field_default(&self, name: &str) -> Option<Value> {
        self.0
            .fields
            .iter()
            .find(|field| field.name == name)
            .and_then(|field| field.default.clone())
    }

    /// Look up a member by name.
    pub fn member(&self, name: &str) -> Option<Member> {
        self.0.members.read().get(name).cloned()
    }

    /// True if the member table has an entry called `name`.
    pub fn has_member(&self, name: &str) -> bool {
        self.0.members.read().contains_key(name)
    }

    /// Names in the member table, in registration order.
    pub fn member_names(&self) -> Vec<String> {
        self.0.members.read().keys().cloned().collect()
    }

    /// Bind `name` to `member`, replacing whatever was there.
    ///
    /// Returns the replaced member.
    pub fn set_member(&self, name: impl Into<String>, member: Member) -> Option<Member> {
        let name = name.into();
        crate::trace!(class = self.name(), member = %name, kind = member.kind(), "set_member");
        self.0.members.write().insert(name, member)
    }

    /// Remove `name` from the member table.
    pub fn remove_member(&self, name: &str) -> Option<Member> {
        self.0.members.write().shift_remove(name)
    }

    /// Create an instance, filling declared fields positionally.
    ///
    /// Fields without an argument take their declared default. Each field is
    /// assigned through [`Object::set_attr`], so a property installed over a
    /// declared field receives the constructor's value.
    pub fn construct<I, V>(&self, args: I) -> Result<Object, AccessError>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut args = args.into_iter().map(Into::into).collect::<Vec<Value>>().into_iter();
        let given = args.len();
        if given > self.0.fields.len() {
            return Err(AccessError::ArgumentCount {
                callable: self.name().to_string(),
                expected: self.0.fields.len(),
                got: given,
            });
        }

        let object = Object::new(self);
        for field in &self.0.fields {
            let value = match args.next().or_else(|| field.default.clone()) {
                Some(value) => value,
                None => {
                    return Err(AccessError::ArgumentCount {
                        callable: self.name().to_string(),
                        expected: self.required_fields(),
                        got: given,
                    });
                }
            };
            object.set_attr(&field.name, value)?;
        }
        Ok(object)
    }

    fn required_fields(&self) -> usize {
        self.0
            .fields
            .iter()
            .filter(|field| field.default.is_none())
            .count()
    }

    /// True if both handles refer to the same class.
    pub fn ptr_eq(&self, other: &Class) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("name", &self.0.name)
            .field("fields", &self.0.fields)
            .field("members", &self.member_names())
            .finish()
    }
}

/// Declares a [`Class`].
#[derive(Debug)]
pub struct ClassBuilder {
    name: String,
    fields: Vec<FieldDecl>,
    members: IndexMap<String, Member>,
}

impl ClassBuilder {
    /// Declare a required data field.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(FieldDecl {
            name: name.into(),
            default: None,
        });
        self
    }

    /// Declare a data field with a default value.
    pub fn field_with_default(mut self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.fields.push(FieldDecl {
            name: name.into(),
            default: Some(default.into()),
        });
        self
    }

    /// Add a method.
    pub fn method<F>(mut self, name: &str, func: F) -> Self
    where
        F: Fn(&Object, &[Value]) -> Result<Value, AccessError> + Send + Sync + 'static,
    {
        self.members
            .insert(name.to_string(), Member::Method(Method::new(name, func)));
        self
    }

    /// Add a class-level attribute.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.members
            .insert(name.into(), Member::Attribute(value.into()));
        self
    }

    /// Add a property.
    pub fn property(mut self, name: impl Into<String>, property: Property) -> Self {
        self.members.insert(name.into(), Member::Property(property));
        self
    }

    /// Finish the declaration.
    pub fn build(self) -> Class {
        Class(Arc::new(ClassInner {
            name: self.name,
            fields: self.fields,
            members: RwLock::new(self.members),
        }))
    }
}
