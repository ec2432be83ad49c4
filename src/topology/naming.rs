//! Sub-element names such as `Face3` or `Edge12`

use crate::error::{MeasureError, Result};
use std::fmt;
use std::str::FromStr;

/// Kind of topological element addressable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Vertex,
    Edge,
    Face,
}

impl ElementKind {
    /// Name prefix used in sub-element paths
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Vertex => "Vertex",
            Self::Edge => "Edge",
            Self::Face => "Face",
        }
    }
}

/// A parsed element name: kind plus 1-based index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementName {
    pub kind: ElementKind,
    pub index: usize,
}

impl ElementName {
    pub fn new(kind: ElementKind, index: usize) -> Self {
        Self { kind, index }
    }

    pub fn face(index: usize) -> Self {
        Self::new(ElementKind::Face, index)
    }

    pub fn edge(index: usize) -> Self {
        Self::new(ElementKind::Edge, index)
    }

    pub fn vertex(index: usize) -> Self {
        Self::new(ElementKind::Vertex, index)
    }
}

impl FromStr for ElementName {
    type Err = MeasureError;

    fn from_str(s: &str) -> Result<Self> {
        for kind in [ElementKind::Vertex, ElementKind::Edge, ElementKind::Face] {
            if let Some(digits) = s.strip_prefix(kind.prefix()) {
                // Canonical decimal only: no sign, no leading zero
                let canonical = digits.starts_with(|c: char| matches!(c, '1'..='9'))
                    && digits.bytes().all(|b| b.is_ascii_digit());
                return match digits.parse::<usize>() {
                    Ok(index) if canonical => Ok(ElementName::new(kind, index)),
                    _ => Err(MeasureError::InvalidSubElement(s.to_string())),
                };
            }
        }
        Err(MeasureError::InvalidSubElement(s.to_string()))
    }
}

impl fmt::Display for ElementName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.index)
    }
}

/// Split a sub-element path into its object prefix and trailing element name.
///
/// `"Pad.Face3"` yields `(["Pad"], "Face3")`; a trailing dot (`"Pad."`)
/// yields an empty element name, meaning the whole shape.
pub fn split_sub_name(sub_name: &str) -> (Vec<&str>, &str) {
    match sub_name.rfind('.') {
        Some(pos) => {
            let prefix = sub_name[..pos].split('.').filter(|s| !s.is_empty()).collect();
            (prefix, &sub_name[pos + 1..])
        }
        None => (Vec::new(), sub_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("Face3".parse::<ElementName>().unwrap(), ElementName::face(3));
        assert_eq!("Edge12".parse::<ElementName>().unwrap(), ElementName::edge(12));
        assert_eq!("Vertex1".parse::<ElementName>().unwrap(), ElementName::vertex(1));
    }

    #[test]
    fn test_reject_bad_names() {
        assert!("Face0".parse::<ElementName>().is_err());
        assert!("Face".parse::<ElementName>().is_err());
        assert!("Solid1".parse::<ElementName>().is_err());
        assert!("Edge-2".parse::<ElementName>().is_err());
    }

    #[test]
    fn test_reject_non_canonical_indices() {
        for name in ["Face+1", "Face01", "Edge007", "Vertex 1", "Face1a", "Edge+0"] {
            assert!(
                matches!(name.parse::<ElementName>(), Err(MeasureError::InvalidSubElement(_))),
                "{name}"
            );
        }
        assert_eq!("Face10".parse::<ElementName>().unwrap(), ElementName::face(10));
    }

    #[test]
    fn test_display_roundtrip() {
        assert_eq!(ElementName::edge(4).to_string(), "Edge4");
    }

    #[test]
    fn test_split_sub_name() {
        assert_eq!(split_sub_name("Face3"), (vec![], "Face3"));
        assert_eq!(split_sub_name("Body.Pad.Edge2"), (vec!["Body", "Pad"], "Edge2"));
        assert_eq!(split_sub_name("Pad."), (vec!["Pad"], ""));
        assert_eq!(split_sub_name(""), (vec![], ""));
    }
}
