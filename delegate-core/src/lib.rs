#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod tracing_macros;
pub(crate) use tracing_macros::trace;

mod error;
pub use error::{AccessError, MissingAttributeError};

mod value;
pub use value::{BoundMethod, Value};

mod class;
pub use class::{Class, ClassBuilder, Member, Method, MethodFn};

mod property;
pub use property::{Deleter, Getter, Property, Setter};

mod object;
pub use object::Object;

mod suggest;
