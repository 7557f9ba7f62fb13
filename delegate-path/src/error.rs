//! Errors raised while parsing dotted paths.

use core::ops::Range;

/// What was wrong with a path.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidPathKind {
    /// The path was the empty string.
    Empty,

    /// A leading, trailing or doubled `.` produced an empty segment.
    EmptySegment {
        /// Index of the empty segment (0-based).
        index: usize,
    },

    /// A segment is not a valid field name.
    InvalidIdentifier {
        /// The offending segment.
        segment: String,
    },
}

/// A malformed ownership path, attribute path or exposed name.
///
/// Raised at setup time; the delegation that carried the path is not installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPathError {
    pub(crate) path: String,
    pub(crate) kind: InvalidPathKind,
    pub(crate) span: Range<usize>,
}

impl InvalidPathError {
    pub(crate) fn new(path: &str, kind: InvalidPathKind, span: Range<usize>) -> Self {
        Self {
            path: path.to_string(),
            kind,
            span,
        }
    }

    /// The full path text as given.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// What went wrong.
    pub fn kind(&self) -> &InvalidPathKind {
        &self.kind
    }

    /// Byte range of the offending segment within [`path`](Self::path).
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl core::fmt::Display for InvalidPathError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.kind {
            InvalidPathKind::Empty => write!(f, "invalid path: path is empty"),
            InvalidPathKind::EmptySegment { index } => {
                write!(f, "invalid path `{}`: segment {index} is empty", self.path)
            }
            InvalidPathKind::InvalidIdentifier { segment } => {
                write!(f, "invalid path `{}`: `{segment}` is not a valid field name", self.path)
            }
        }
    }
}

impl core::error::Error for InvalidPathError {}
