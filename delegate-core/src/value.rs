use core::fmt;

use crate::{AccessError, Method, MissingAttributeError, Object};

/// A dynamically typed value stored in an object field.
///
/// Objects and bound methods are handles: cloning a `Value::Object` aliases
/// the same instance, so a write through one clone is seen through all of them.
#[derive(Clone, Default)]
pub enum Value {
    /// The absence of a value.
    #[default]
    None,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Str(String),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A handle to an instance of some [`Class`](crate::Class).
    Object(Object),
    /// A method bound to its receiver.
    Method(BoundMethod),
}

impl Value {
    /// Name of this value's type, as used in error messages.
    pub fn type_name(&self) -> String {
        match self {
            Value::None => "NoneType".into(),
            Value::Bool(_) => "bool".into(),
            Value::Int(_) => "int".into(),
            Value::Float(_) => "float".into(),
            Value::Str(_) => "str".into(),
            Value::List(_) => "list".into(),
            Value::Object(object) => object.class().name().into(),
            Value::Method(_) => "method".into(),
        }
    }

    /// Read an attribute. Only objects have attributes.
    pub fn get_attr(&self, name: &str) -> Result<Value, AccessError> {
        match self {
            Value::Object(object) => object.get_attr(name),
            other => Err(other.no_attribute(name)),
        }
    }

    /// Write an attribute. Only objects have attributes.
    pub fn set_attr(&self, name: &str, value: impl Into<Value>) -> Result<(), AccessError> {
        match self {
            Value::Object(object) => object.set_attr(name, value),
            other => Err(other.no_attribute(name)),
        }
    }

    /// Delete an attribute. Only objects have attributes.
    pub fn del_attr(&self, name: &str) -> Result<(), AccessError> {
        match self {
            Value::Object(object) => object.del_attr(name),
            other => Err(other.no_attribute(name)),
        }
    }

    /// Call this value with positional arguments.
    pub fn call(&self, args: &[Value]) -> Result<Value, AccessError> {
        match self {
            Value::Method(method) => method.call(args),
            other => Err(AccessError::NotCallable {
                type_name: other.type_name(),
            }),
        }
    }

    fn no_attribute(&self, name: &str) -> AccessError {
        MissingAttributeError {
            type_name: self.type_name(),
            attribute: name.to_string(),
            suggestion: None,
        }
        .into()
    }

    /// True for [`Value::None`].
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// The string, if this is a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The integer, if this is a [`Value::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The number, if this is a [`Value::Float`] or [`Value::Int`].
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// The boolean, if this is a [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The items, if this is a [`Value::List`].
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// The object handle, if this is a [`Value::Object`].
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// The bound method, if this is a [`Value::Method`].
    pub fn as_method(&self) -> Option<&BoundMethod> {
        match self {
            Value::Method(method) => Some(method),
            _ => None,
        }
    }

    /// Render the way an interactive interpreter would echo the value:
    /// strings quoted, objects as `Class(field=...)`.
    pub fn repr(&self) -> String {
        struct Repr<'a>(&'a Value);

        impl fmt::Display for Repr<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.write_repr(f)
            }
        }

        Repr(self).to_string()
    }

    pub(crate) fn write_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("None"),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Str(s) => {
                f.write_str("'")?;
                for c in s.chars() {
                    match c {
                        '\'' => f.write_str("\\'")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        c => write!(f, "{c}")?,
                    }
                }
                f.write_str("'")
            }
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.write_repr(f)?;
                }
                f.write_str("]")
            }
            Value::Object(object) => write!(f, "{object}"),
            Value::Method(method) => write!(f, "{method}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            other => other.write_repr(f),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_repr(f)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                (*a as f64) == *b
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            (Value::Method(a), Value::Method(b)) => a == b,
            _ => false,
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::None
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl From<&Object> for Value {
    fn from(value: &Object) -> Self {
        Value::Object(value.clone())
    }
}

impl From<BoundMethod> for Value {
    fn from(value: BoundMethod) -> Self {
        Value::Method(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// A method together with the object it was looked up on.
#[derive(Clone)]
pub struct BoundMethod {
    receiver: Object,
    method: Method,
}

impl BoundMethod {
    pub(crate) fn new(receiver: Object, method: Method) -> Self {
        Self { receiver, method }
    }

    /// The object the method was looked up on.
    pub fn receiver(&self) -> &Object {
        &self.receiver
    }

    /// The method's name.
    pub fn name(&self) -> &str {
        self.method.name()
    }

    /// Invoke the method on its receiver.
    pub fn call(&self, args: &[Value]) -> Result<Value, AccessError> {
        crate::trace!(method = self.name(), args = args.len(), "calling bound method");
        self.method.call(&self.receiver, args)
    }
}

impl PartialEq for BoundMethod {
    fn eq(&self, other: &Self) -> bool {
        self.receiver.ptr_eq(&other.receiver) && self.method.ptr_eq(&other.method)
    }
}

impl fmt::Display for BoundMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<bound method {}.{} of {}>",
            self.receiver.class().name(),
            self.name(),
            self.receiver
        )
    }
}

impl fmt::Debug for BoundMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
