use delegate_path::{AttrPath, InvalidPathError, TraversalSteps, validate_name};

/// One delegation: expose `owner.attribute` as `exposed_name`.
///
/// Built by the normalizer; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegationSpec {
    owner: AttrPath,
    attribute: AttrPath,
    exposed_name: String,
}

impl DelegationSpec {
    /// Delegate `attribute` of `owner`, exposed under the attribute's last segment.
    pub fn new(owner: &str, attribute: &str) -> Result<Self, InvalidPathError> {
        Self::from_paths(AttrPath::parse(owner)?, AttrPath::parse(attribute)?, None)
    }

    /// Delegate `attribute` of `owner`, exposed as `exposed_name`.
    pub fn named(owner: &str, attribute: &str, exposed_name: &str) -> Result<Self, InvalidPathError> {
        Self::from_paths(
            AttrPath::parse(owner)?,
            AttrPath::parse(attribute)?,
            Some(exposed_name.to_string()),
        )
    }

    /// Assemble from parsed paths; `None` derives the exposed name.
    pub fn from_paths(
        owner: AttrPath,
        attribute: AttrPath,
        exposed_name: Option<String>,
    ) -> Result<Self, InvalidPathError> {
        let exposed_name = match exposed_name {
            Some(name) => {
                validate_name(&name)?;
                name
            }
            None => attribute.last().to_string(),
        };
        Ok(Self {
            owner,
            attribute,
            exposed_name,
        })
    }

    /// Path from the receiver to the owning object.
    pub fn owner(&self) -> &AttrPath {
        &self.owner
    }

    /// Path from the owner to the delegated value.
    pub fn attribute(&self) -> &AttrPath {
        &self.attribute
    }

    /// Name the delegated value is exposed under.
    pub fn exposed_name(&self) -> &str {
        &self.exposed_name
    }

    /// Resolve into the traversal steps an accessor walks.
    pub fn steps(&self) -> TraversalSteps {
        TraversalSteps::new(&self.owner, &self.attribute)
    }
}
