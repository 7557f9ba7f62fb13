//! Setup-time errors.

use delegate_path::InvalidPathError;

/// Why a delegation could not be set up.
///
/// Setup errors abort the delegation call that raised them before anything
/// from that call is installed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SetupError {
    /// An ownership path, attribute path or exposed name is malformed.
    InvalidPath(InvalidPathError),

    /// Attribute paths and exposed names were paired positionally but the
    /// two lists differ in length.
    ArityMismatch {
        /// The ownership path of the failing call.
        owner: String,
        /// Number of attribute paths.
        attributes: usize,
        /// Number of exposed names.
        names: usize,
    },
}

impl From<InvalidPathError> for SetupError {
    fn from(value: InvalidPathError) -> Self {
        SetupError::InvalidPath(value)
    }
}

impl core::fmt::Display for SetupError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SetupError::InvalidPath(err) => write!(f, "{err}"),
            SetupError::ArityMismatch {
                owner,
                attributes,
                names,
            } => write!(
                f,
                "cannot delegate to `{owner}`: {attributes} attribute path(s) but {names} exposed name(s)"
            ),
        }
    }
}

impl core::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            SetupError::InvalidPath(err) => Some(err),
            SetupError::ArityMismatch { .. } => None,
        }
    }
}

#[cfg(feature = "miette")]
impl miette::Diagnostic for SetupError {
    fn code<'a>(&'a self) -> Option<Box<dyn core::fmt::Display + 'a>> {
        match self {
            SetupError::InvalidPath(err) => miette::Diagnostic::code(err),
            SetupError::ArityMismatch { .. } => Some(Box::new("delegate::arity_mismatch")),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn core::fmt::Display + 'a>> {
        match self {
            SetupError::InvalidPath(err) => miette::Diagnostic::help(err),
            SetupError::ArityMismatch { .. } => Some(Box::new(
                "give one exposed name per attribute path, or none to use the last path segment",
            )),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            SetupError::InvalidPath(err) => miette::Diagnostic::source_code(err),
            SetupError::ArityMismatch { .. } => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + '_>> {
        match self {
            SetupError::InvalidPath(err) => miette::Diagnostic::labels(err),
            SetupError::ArityMismatch { .. } => None,
        }
    }
}
