#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod tracing_macros;
pub(crate) use tracing_macros::{debug, trace};

pub use delegate_core::*;
pub use delegate_path::{
    AttrPath, InvalidPathError, InvalidPathKind, PathStep, TraversalSteps, resolve,
};

mod error;
pub use error::SetupError;

mod spec;
pub use spec::DelegationSpec;

mod synth;
pub use synth::{AccessorTriple, synthesize};

mod install;
pub use install::install;

mod normalize;
pub use normalize::{Delegate, DelegateExt, Delegates, OneOrMany, delegate, normalize};

/// Build a [`Delegates`] batch from single-owner call shapes.
///
/// Each argument is anything that converts into a [`Delegate`]:
///
/// ```rust
/// let batch = delegate::delegates![
///     ("kitchen", ["oven", "fridge", "bake"]),
///     ("kitchen", "bake", "make_cake"),
///     ("kitchen.fridge", "cool"),
/// ];
/// assert_eq!(batch.len(), 3);
/// ```
#[macro_export]
macro_rules! delegates {
    ($($spec:expr),* $(,)?) => {
        $crate::Delegates::from(::std::vec![$($crate::Delegate::from($spec)),*])
    };
}
