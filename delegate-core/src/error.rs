//! Errors raised by the attribute-access protocol.

/// An attribute was not found on the object it was looked up on.
///
/// This is what a delegated accessor reports when any link of its chain,
/// or the terminal field itself, is absent at call time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingAttributeError {
    /// Name of the type the lookup happened on (`Kitchen`, `str`, ...).
    pub type_name: String,
    /// The attribute that was not found.
    pub attribute: String,
    /// A known attribute with a similar name, if any.
    pub suggestion: Option<String>,
}

impl core::fmt::Display for MissingAttributeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "'{}' object has no attribute '{}'",
            self.type_name, self.attribute
        )?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

impl core::error::Error for MissingAttributeError {}

/// Errors from reading, writing, deleting or calling attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessError {
    /// The attribute does not exist.
    MissingAttribute(MissingAttributeError),

    /// Assignment to a property that has no setter.
    ReadOnly {
        /// Owning type.
        type_name: String,
        /// The property name.
        attribute: String,
    },

    /// Deletion of a property that has no deleter.
    Undeletable {
        /// Owning type.
        type_name: String,
        /// The attribute name.
        attribute: String,
    },

    /// Tried to call a value that is not a method.
    NotCallable {
        /// Type of the value that was called.
        type_name: String,
    },

    /// A constructor or method got the wrong number of positional arguments.
    ArgumentCount {
        /// What was called, e.g. `Kitchen` or `Kitchen.bake`.
        callable: String,
        /// Number of arguments accepted.
        expected: usize,
        /// Number of arguments given.
        got: usize,
    },
}

impl AccessError {
    /// Returns the missing-attribute details if that is what this error is.
    pub fn as_missing(&self) -> Option<&MissingAttributeError> {
        match self {
            AccessError::MissingAttribute(missing) => Some(missing),
            _ => None,
        }
    }

    /// True for [`AccessError::MissingAttribute`].
    pub fn is_missing(&self) -> bool {
        self.as_missing().is_some()
    }
}

impl From<MissingAttributeError> for AccessError {
    fn from(value: MissingAttributeError) -> Self {
        AccessError::MissingAttribute(value)
    }
}

impl core::fmt::Display for AccessError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AccessError::MissingAttribute(missing) => write!(f, "{missing}"),
            AccessError::ReadOnly {
                type_name,
                attribute,
            } => write!(f, "property '{attribute}' of '{type_name}' object has no setter"),
            AccessError::Undeletable {
                type_name,
                attribute,
            } => write!(f, "cannot delete attribute '{attribute}' of '{type_name}' object"),
            AccessError::NotCallable { type_name } => {
                write!(f, "'{type_name}' object is not callable")
            }
            AccessError::ArgumentCount {
                callable,
                expected,
                got,
            } => write!(
                f,
                "{callable}() takes {expected} positional argument(s) but {got} were given"
            ),
        }
    }
}

impl core::error::Error for AccessError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            AccessError::MissingAttribute(missing) => Some(missing),
            _ => None,
        }
    }
}
