use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// An opaque format identifier.
///
/// Only equality and hashing are used by the search. `Display` is needed
/// for error messages and rendered paths. Implemented for every type that
/// satisfies the bounds, so `String`, `&str` and custom enums all work.
pub trait Format: Clone + Eq + Hash + fmt::Display {}

impl<T> Format for T where T: Clone + Eq + Hash + fmt::Display {}

/// A single available converter from one format to another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversionEdge<F> {
    /// Format the converter reads
    pub from: F,

    /// Format the converter produces
    pub to: F,
}

impl<F> ConversionEdge<F> {
    /// Creates a new edge.
    #[must_use]
    pub const fn new(from: F, to: F) -> Self {
        Self { from, to }
    }
}

impl<F: fmt::Display> fmt::Display for ConversionEdge<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

impl<F, A: Into<F>, B: Into<F>> From<(A, B)> for ConversionEdge<F> {
    fn from((from, to): (A, B)) -> Self {
        Self::new(from.into(), to.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_display() {
        let edge = ConversionEdge::new("png", "jpg");
        assert_eq!(edge.to_string(), "png -> jpg");
    }

    #[test]
    fn test_edge_from_tuple() {
        let edge: ConversionEdge<String> = ("png", "webp").into();
        assert_eq!(edge.from, "png");
        assert_eq!(edge.to, "webp");
    }

    #[test]
    fn test_edge_json_shape() {
        let edge = ConversionEdge::new("png".to_string(), "jpg".to_string());
        let json = serde_json::to_string(&edge).unwrap();
        assert_eq!(json, r#"{"from":"png","to":"jpg"}"#);

        let parsed: ConversionEdge<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, edge);
    }

    #[test]
    fn test_edge_rejects_unknown_fields() {
        let result =
            serde_json::from_str::<ConversionEdge<String>>(r#"{"from":"a","to":"b","cost":3}"#);
        assert!(result.is_err());
    }
}
