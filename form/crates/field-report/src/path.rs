//! Dotted/indexed paths identifying form fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One step in a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathSegment {
    /// A named field, e.g. `email`.
    Key(String),
    /// A zero-based position within an ordered list.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Errors raised when parsing the dotted path form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFieldPathError {
    /// The input held no segments at all.
    #[error("field path must not be empty")]
    Empty,
    /// Two consecutive dots, or a leading/trailing dot, produced an empty
    /// segment.
    #[error("field path segment {position} must not be empty")]
    EmptySegment {
        /// Zero-based position of the offending segment.
        position: usize,
    },
    /// An all-digit segment does not fit in a list index.
    #[error("field path segment {position} is not a representable index")]
    IndexOutOfRange {
        /// Zero-based position of the offending segment.
        position: usize,
    },
}

/// Location of a field (or list element) within a submitted form.
///
/// Paths render and parse as dot-joined segments with list positions in
/// decimal, e.g. `technologies.0.name`. Ordering is segment-wise and
/// indices compare numerically, so `technologies.2` sorts before
/// `technologies.10`.
///
/// ## Invariants
/// - A path always holds at least one segment.
/// - Display and [`FromStr`] round-trip.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Starts a path at a named root field.
    pub fn field(key: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Key(key.into())],
        }
    }

    /// Appends a named segment.
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.segments.push(PathSegment::Key(key.into()));
        self
    }

    /// Appends a list-position segment.
    #[must_use]
    pub fn index(mut self, index: usize) -> Self {
        self.segments.push(PathSegment::Index(index));
        self
    }

    /// Segments in root-to-leaf order.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        self.segments.as_slice()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.segments.iter().enumerate() {
            if position > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for FieldPath {
    type Err = ParseFieldPathError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.is_empty() {
            return Err(ParseFieldPathError::Empty);
        }

        let mut segments = Vec::new();
        for (position, part) in value.split('.').enumerate() {
            if part.is_empty() {
                return Err(ParseFieldPathError::EmptySegment { position });
            }
            if part.bytes().all(|byte| byte.is_ascii_digit()) {
                let index = part
                    .parse()
                    .map_err(|_| ParseFieldPathError::IndexOutOfRange { position })?;
                segments.push(PathSegment::Index(index));
            } else {
                segments.push(PathSegment::Key(part.to_owned()));
            }
        }
        Ok(Self { segments })
    }
}

impl TryFrom<String> for FieldPath {
    type Error = ParseFieldPathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FieldPath> for String {
    fn from(value: FieldPath) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("name")]
    #[case("confirmedPassword")]
    #[case("technologies.0.name")]
    #[case("technologies.12.knowledge")]
    fn display_and_parse_round_trip(#[case] rendered: &str) {
        let path: FieldPath = rendered.parse().expect("parseable path");
        assert_eq!(path.to_string(), rendered);
    }

    #[rstest]
    fn builder_matches_parsed_form() {
        let built = FieldPath::field("technologies").index(0).key("name");
        let parsed: FieldPath = "technologies.0.name".parse().expect("parseable path");
        assert_eq!(built, parsed);
    }

    #[rstest]
    fn digit_segments_parse_as_indices() {
        let path: FieldPath = "technologies.3".parse().expect("parseable path");
        assert_eq!(
            path.segments(),
            &[
                PathSegment::Key("technologies".to_owned()),
                PathSegment::Index(3),
            ]
        );
    }

    #[rstest]
    fn rejects_empty_input() {
        let result = "".parse::<FieldPath>();
        assert_eq!(result, Err(ParseFieldPathError::Empty));
    }

    #[rstest]
    #[case("technologies..name", 1)]
    #[case(".name", 0)]
    #[case("name.", 1)]
    fn rejects_empty_segments(#[case] input: &str, #[case] position: usize) {
        let result = input.parse::<FieldPath>();
        assert_eq!(result, Err(ParseFieldPathError::EmptySegment { position }));
    }

    #[rstest]
    fn rejects_oversized_index() {
        let input = format!("technologies.{}9", usize::MAX);
        let result = input.parse::<FieldPath>();
        assert_eq!(
            result,
            Err(ParseFieldPathError::IndexOutOfRange { position: 1 })
        );
    }

    #[rstest]
    fn indices_order_numerically() {
        let second = FieldPath::field("technologies").index(2);
        let tenth = FieldPath::field("technologies").index(10);
        assert!(second < tenth);
    }

    #[rstest]
    fn serde_uses_the_dotted_string_form() {
        let path = FieldPath::field("technologies").index(0).key("name");
        let value = serde_json::to_value(&path).expect("serialise to JSON");
        assert_eq!(value, serde_json::json!("technologies.0.name"));

        let back: FieldPath =
            serde_json::from_value(value).expect("deserialise from JSON");
        assert_eq!(back, path);
    }
}
