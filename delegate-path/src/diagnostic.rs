//! `miette` rendering for path errors: the path text is the source code and
//! the offending segment is underlined.

use miette::{Diagnostic, LabeledSpan, SourceSpan};

use crate::{InvalidPathError, InvalidPathKind};

impl Diagnostic for InvalidPathError {
    fn code<'a>(&'a self) -> Option<Box<dyn core::fmt::Display + 'a>> {
        Some(Box::new("delegate::invalid_path"))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.path)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span();
        let label = match self.kind() {
            InvalidPathKind::Empty => "empty path",
            InvalidPathKind::EmptySegment { .. } => "empty segment",
            InvalidPathKind::InvalidIdentifier { .. } => "not a field name",
        };
        Some(Box::new(core::iter::once(LabeledSpan::new_with_span(
            Some(label.to_string()),
            SourceSpan::new(span.start.into(), span.end - span.start),
        ))))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn core::fmt::Display + 'a>> {
        let help = match self.kind() {
            InvalidPathKind::Empty => "give at least one field name, e.g. `kitchen`",
            InvalidPathKind::EmptySegment { .. } => {
                "remove the leading, trailing or doubled `.`"
            }
            InvalidPathKind::InvalidIdentifier { .. } => {
                "field names start with a letter or `_` and contain only letters, digits and `_`"
            }
        };
        Some(Box::new(help))
    }
}
