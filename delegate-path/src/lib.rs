#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

use core::fmt;
use core::str::FromStr;

mod error;
pub use error::{InvalidPathError, InvalidPathKind};

#[cfg(feature = "miette")]
mod diagnostic;

/// Segment delimiter for dotted paths.
pub const DELIMITER: char = '.';

/// A validated, dot-delimited attribute path such as `kitchen.fridge`.
///
/// Every segment is a non-empty identifier. Paths are fixed once parsed;
/// nothing about them is computed at access time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttrPath {
    segments: Vec<String>,
}

impl AttrPath {
    /// Parse a dotted path, validating every segment.
    pub fn parse(path: &str) -> Result<Self, InvalidPathError> {
        if path.is_empty() {
            return Err(InvalidPathError::new(path, InvalidPathKind::Empty, 0..0));
        }

        let segments: Vec<String> = path.split(DELIMITER).map(str::to_string).collect();
        check_segments(path, &segments)?;
        Ok(Self { segments })
    }

    /// Build a path from segments that were already split by the caller.
    ///
    /// Each segment must be an identifier on its own; a segment containing
    /// the delimiter is rejected rather than split. Error spans point into
    /// the segments joined with `.`.
    pub fn from_segments<I, S>(segments: I) -> Result<Self, InvalidPathError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments: Vec<String> = segments
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();
        let joined = segments.join(".");
        if segments.is_empty() {
            return Err(InvalidPathError::new(&joined, InvalidPathKind::Empty, 0..0));
        }

        check_segments(&joined, &segments)?;
        Ok(Self { segments })
    }

    /// The segments of this path, in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The last segment. Paths are never empty, so this always exists.
    pub fn last(&self) -> &str {
        // parse() rejects empty paths
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Check that every segment is an identifier. `path` is the segments joined
/// with the delimiter; spans are reported against it.
fn check_segments(path: &str, segments: &[String]) -> Result<(), InvalidPathError> {
    let mut offset = 0;
    for (index, segment) in segments.iter().enumerate() {
        let span = offset..offset + segment.len();
        if segment.is_empty() {
            return Err(InvalidPathError::new(
                path,
                InvalidPathKind::EmptySegment { index },
                span,
            ));
        }
        if !is_identifier(segment) {
            return Err(InvalidPathError::new(
                path,
                InvalidPathKind::InvalidIdentifier {
                    segment: segment.clone(),
                },
                span,
            ));
        }
        offset = span.end + DELIMITER.len_utf8();
    }
    Ok(())
}

impl fmt::Display for AttrPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl FromStr for AttrPath {
    type Err = InvalidPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for AttrPath {
    type Error = InvalidPathError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// Check that `name` is a valid field name: a letter or `_` followed by
/// letters, digits or `_`.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}

/// Validate a single exposed member name.
pub fn validate_name(name: &str) -> Result<(), InvalidPathError> {
    if name.is_empty() {
        return Err(InvalidPathError::new(name, InvalidPathKind::Empty, 0..0));
    }
    if !is_identifier(name) {
        return Err(InvalidPathError::new(
            name,
            InvalidPathKind::InvalidIdentifier {
                segment: name.to_string(),
            },
            0..name.len(),
        ));
    }
    Ok(())
}

/// A single step of a traversal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    /// The object the accessor is invoked on. Always the first step.
    Receiver,
    /// Read a field to reach the next object in the chain.
    Hop(String),
    /// The field the getter reads, the setter writes and the deleter removes.
    Terminal(String),
}

impl PathStep {
    /// Field name for hops and the terminal step; `self` for the receiver.
    pub fn name(&self) -> &str {
        match self {
            PathStep::Receiver => "self",
            PathStep::Hop(name) | PathStep::Terminal(name) => name,
        }
    }
}

/// Ordered steps from the receiver to the terminal field.
///
/// The list is `[Receiver, Hop.., Terminal]`: every owner segment and every
/// attribute segment except the last is a hop, the last attribute segment is
/// the terminal field. The list therefore always holds at least two steps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TraversalSteps {
    steps: Vec<PathStep>,
}

impl TraversalSteps {
    /// Combine an ownership path and an attribute path.
    pub fn new(owner: &AttrPath, attribute: &AttrPath) -> Self {
        let mut steps = Vec::with_capacity(1 + owner.len() + attribute.len());
        steps.push(PathStep::Receiver);
        steps.extend(owner.segments().iter().cloned().map(PathStep::Hop));

        let (terminal, inner) = attribute
            .segments()
            .split_last()
            .map(|(last, rest)| (last.clone(), rest))
            .unwrap_or_default();
        steps.extend(inner.iter().cloned().map(PathStep::Hop));
        steps.push(PathStep::Terminal(terminal));

        Self { steps }
    }

    /// All steps, receiver first.
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Names of the intermediate fields read before the terminal one.
    pub fn hops(&self) -> impl Iterator<Item = &str> + '_ {
        self.steps.iter().filter_map(|step| match step {
            PathStep::Hop(name) => Some(name.as_str()),
            _ => None,
        })
    }

    /// Name of the terminal field.
    pub fn terminal(&self) -> &str {
        self.steps.last().map(PathStep::name).unwrap_or_default()
    }

    /// Number of steps, including the receiver.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`: there is at least a receiver and a terminal step.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for TraversalSteps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(step.name())?;
        }
        Ok(())
    }
}

/// Parse an ownership path and an attribute path into traversal steps.
pub fn resolve(owner: &str, attribute: &str) -> Result<TraversalSteps, InvalidPathError> {
    let owner = AttrPath::parse(owner)?;
    let attribute = AttrPath::parse(attribute)?;
    Ok(TraversalSteps::new(&owner, &attribute))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_segments() {
        let path = AttrPath::parse("kitchen.fridge").unwrap();
        assert_eq!(path.segments(), ["kitchen", "fridge"]);
        assert_eq!(path.last(), "fridge");
        assert_eq!(path.to_string(), "kitchen.fridge");
    }

    #[test]
    fn identifiers() {
        assert!(is_identifier("_private"));
        assert!(is_identifier("fridge2"));
        assert!(is_identifier("größe"));
        assert!(!is_identifier("2fridge"));
        assert!(!is_identifier("fr-idge"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn attribute_prefix_becomes_hops() {
        let steps = resolve("kitchen", "oven.heat").unwrap();
        assert_eq!(
            steps.steps(),
            [
                PathStep::Receiver,
                PathStep::Hop("kitchen".into()),
                PathStep::Hop("oven".into()),
                PathStep::Terminal("heat".into()),
            ]
        );
        assert_eq!(steps.hops().collect::<Vec<_>>(), ["kitchen", "oven"]);
        assert_eq!(steps.terminal(), "heat");
    }

    #[test]
    fn from_segments_matches_parse() {
        let a = AttrPath::from_segments(["kitchen", "fridge"]).unwrap();
        let b: AttrPath = "kitchen.fridge".parse().unwrap();
        assert_eq!(a, b);
        assert!(AttrPath::from_segments(["kitchen", ""]).is_err());
    }

    #[test]
    fn from_segments_rejects_delimiter_inside_segment() {
        let err = AttrPath::from_segments(["kitchen.fridge"]).unwrap_err();
        assert_eq!(
            err.kind(),
            &InvalidPathKind::InvalidIdentifier {
                segment: "kitchen.fridge".into()
            }
        );
        assert_eq!(err.span(), 0..14);

        let err = AttrPath::from_segments(["kitchen", "oven.heat"]).unwrap_err();
        assert_eq!(err.path(), "kitchen.oven.heat");
        assert_eq!(err.span(), 8..17);
    }

    #[test]
    fn from_segments_reports_empty_segment_index() {
        let err = AttrPath::from_segments(["kitchen", "", "brand"]).unwrap_err();
        assert_eq!(err.kind(), &InvalidPathKind::EmptySegment { index: 1 });
        assert_eq!(err.span(), 8..8);

        let err = AttrPath::from_segments(Vec::<&str>::new()).unwrap_err();
        assert_eq!(err.kind(), &InvalidPathKind::Empty);
    }
}
