//! Call shapes accepted at setup time, and their expansion into
//! [`DelegationSpec`]s.
//!
//! | shape | result |
//! |-------|--------|
//! | `("kitchen", "bake")` | `bake` |
//! | `("kitchen", "bake", "make_cake")` | `make_cake` |
//! | `("kitchen", ["oven", "fridge"])` | `oven`, `fridge` |
//! | `("kitchen", ["bake", "oven.heat"], ["make_cake", "warm"])` | `make_cake`, `warm` |
//!
//! A batch of such shapes expands to the concatenation of each expansion.

use delegate_core::Class;
use delegate_path::AttrPath;

use crate::{DelegationSpec, SetupError, install, synthesize};

/// A single string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OneOrMany {
    /// One entry.
    One(String),
    /// Any number of entries.
    Many(Vec<String>),
}

impl OneOrMany {
    /// View as a slice regardless of shape.
    pub fn as_slice(&self) -> &[String] {
        match self {
            OneOrMany::One(one) => core::slice::from_ref(one),
            OneOrMany::Many(many) => many,
        }
    }
}

impl From<&str> for OneOrMany {
    fn from(value: &str) -> Self {
        OneOrMany::One(value.to_string())
    }
}

impl From<String> for OneOrMany {
    fn from(value: String) -> Self {
        OneOrMany::One(value)
    }
}

impl<const N: usize> From<[&str; N]> for OneOrMany {
    fn from(value: [&str; N]) -> Self {
        OneOrMany::Many(value.iter().map(|s| s.to_string()).collect())
    }
}

impl From<&[&str]> for OneOrMany {
    fn from(value: &[&str]) -> Self {
        OneOrMany::Many(value.iter().map(|s| s.to_string()).collect())
    }
}

impl From<Vec<&str>> for OneOrMany {
    fn from(value: Vec<&str>) -> Self {
        OneOrMany::Many(value.into_iter().map(String::from).collect())
    }
}

impl From<Vec<String>> for OneOrMany {
    fn from(value: Vec<String>) -> Self {
        OneOrMany::Many(value)
    }
}

/// One setup call: a single owner, one or more attribute paths, and
/// optionally the names to expose them under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delegate {
    owner: String,
    attributes: OneOrMany,
    names: Option<OneOrMany>,
}

/// Delegate `attributes` of the object at `owner`.
///
/// ```rust
/// use delegate::{Class, delegate};
///
/// let house = Class::builder("House").field("kitchen").build();
/// delegate("kitchen", "bake").named("make_cake").apply(&house).unwrap();
/// assert!(house.has_member("make_cake"));
/// ```
pub fn delegate(owner: impl Into<String>, attributes: impl Into<OneOrMany>) -> Delegate {
    Delegate::new(owner, attributes)
}

impl Delegate {
    /// Delegate `attributes` of `owner` under their default names.
    pub fn new(owner: impl Into<String>, attributes: impl Into<OneOrMany>) -> Self {
        Self {
            owner: owner.into(),
            attributes: attributes.into(),
            names: None,
        }
    }

    /// Expose the attributes under `names`, paired by position.
    pub fn named(mut self, names: impl Into<OneOrMany>) -> Self {
        self.names = Some(names.into());
        self
    }

    /// The ownership path as given.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Expand into one spec per attribute path.
    ///
    /// Either every spec of this call is valid, or an error is returned.
    pub fn expand(&self) -> Result<Vec<DelegationSpec>, SetupError> {
        let attributes = self.attributes.as_slice();
        let names = self.names.as_ref().map(OneOrMany::as_slice);
        if let Some(names) = names
            && names.len() != attributes.len()
        {
            return Err(SetupError::ArityMismatch {
                owner: self.owner.clone(),
                attributes: attributes.len(),
                names: names.len(),
            });
        }

        let owner = AttrPath::parse(&self.owner)?;
        attributes
            .iter()
            .enumerate()
            .map(|(i, attribute)| -> Result<DelegationSpec, SetupError> {
                let attribute = AttrPath::parse(attribute)?;
                let name = names.map(|names| names[i].clone());
                Ok(DelegationSpec::from_paths(owner.clone(), attribute, name)?)
            })
            .collect()
    }

    /// Expand, then resolve, synthesize and install every spec on `class`,
    /// in declaration order.
    pub fn apply(&self, class: &Class) -> Result<(), SetupError> {
        apply_specs(class, self.expand()?);
        Ok(())
    }
}

fn apply_specs(class: &Class, specs: Vec<DelegationSpec>) {
    for spec in specs {
        let triple = synthesize(spec.steps());
        install(class, spec.exposed_name(), triple);
    }
}

impl<O, A> From<(O, A)> for Delegate
where
    O: Into<String>,
    A: Into<OneOrMany>,
{
    fn from((owner, attributes): (O, A)) -> Self {
        Delegate::new(owner, attributes)
    }
}

impl<O, A, N> From<(O, A, N)> for Delegate
where
    O: Into<String>,
    A: Into<OneOrMany>,
    N: Into<OneOrMany>,
{
    fn from((owner, attributes, names): (O, A, N)) -> Self {
        Delegate::new(owner, attributes).named(names)
    }
}

/// Several independent [`Delegate`] calls applied to one class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delegates(Vec<Delegate>);

impl Delegates {
    /// An empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a call.
    pub fn with(mut self, delegate: impl Into<Delegate>) -> Self {
        self.0.push(delegate.into());
        self
    }

    /// Number of calls in the batch.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the batch has no calls.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Expand every call, in order.
    pub fn expand(&self) -> Result<Vec<DelegationSpec>, SetupError> {
        normalize(self.0.iter().cloned())
    }

    /// Apply each call in order.
    ///
    /// Each call is all-or-nothing, but the batch is not: when a call fails,
    /// the calls before it stay installed.
    pub fn apply(&self, class: &Class) -> Result<(), SetupError> {
        for delegate in &self.0 {
            delegate.apply(class)?;
        }
        Ok(())
    }
}

impl From<Vec<Delegate>> for Delegates {
    fn from(value: Vec<Delegate>) -> Self {
        Delegates(value)
    }
}

impl FromIterator<Delegate> for Delegates {
    fn from_iter<T: IntoIterator<Item = Delegate>>(iter: T) -> Self {
        Delegates(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Delegates {
    type Item = &'a Delegate;
    type IntoIter = core::slice::Iter<'a, Delegate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Expand any sequence of call shapes into delegation specs.
pub fn normalize<I>(raw: I) -> Result<Vec<DelegationSpec>, SetupError>
where
    I: IntoIterator,
    I::Item: Into<Delegate>,
{
    let mut specs = Vec::new();
    for delegate in raw {
        specs.extend(delegate.into().expand()?);
    }
    Ok(specs)
}

/// Setup-time surface on [`Class`], chainable so delegations from several
/// owners can be stacked.
pub trait DelegateExt {
    /// Apply one delegation call.
    fn delegate(&self, delegate: impl Into<Delegate>) -> Result<&Self, SetupError>;

    /// Apply a batch of delegation calls.
    fn delegates(&self, batch: impl Into<Delegates>) -> Result<&Self, SetupError>;
}

impl DelegateExt for Class {
    fn delegate(&self, delegate: impl Into<Delegate>) -> Result<&Self, SetupError> {
        delegate.into().apply(self)?;
        Ok(self)
    }

    fn delegates(&self, batch: impl Into<Delegates>) -> Result<&Self, SetupError> {
        batch.into().apply(self)?;
        Ok(self)
    }
}
