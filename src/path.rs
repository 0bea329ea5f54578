use crate::edge::{ConversionEdge, Format};
use serde::Serialize;
use std::fmt;

/// An ordered, non-empty chain of conversions.
///
/// Edges are stored in application order: the first edge reads a format the
/// caller already has, the last edge produces the requested format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConversionPath<F> {
    edges: Vec<ConversionEdge<F>>,
}

impl<F> ConversionPath<F> {
    /// Wraps edges already known to be non-empty and chained.
    pub(crate) fn from_edges(edges: Vec<ConversionEdge<F>>) -> Self {
        debug_assert!(!edges.is_empty(), "conversion paths are never empty");
        Self { edges }
    }

    /// Returns the edges in application order.
    #[must_use]
    pub fn edges(&self) -> &[ConversionEdge<F>] {
        &self.edges
    }

    /// Consumes the path and returns its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<ConversionEdge<F>> {
        self.edges
    }

    /// Number of conversions in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The available format the chain starts from.
    #[must_use]
    pub fn source(&self) -> &F {
        &self.edges[0].from
    }

    /// The format the chain produces.
    #[must_use]
    pub fn target(&self) -> &F {
        &self.edges[self.edges.len() - 1].to
    }

    /// Iterates over every format visited, source first.
    pub fn formats(&self) -> impl Iterator<Item = &F> {
        std::iter::once(self.source()).chain(self.edges.iter().map(|edge| &edge.to))
    }

    /// Iterates over the edges in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, ConversionEdge<F>> {
        self.edges.iter()
    }
}

impl<F: Format> ConversionPath<F> {
    /// Checks that this path starts at one of `available`, ends at `target`
    /// and that every adjacent pair of edges meets at a shared format.
    #[must_use]
    pub fn is_valid_for(&self, available: &[F], target: &F) -> bool {
        !self.edges.is_empty()
            && available.contains(self.source())
            && self.target() == target
            && self.edges.windows(2).all(|pair| pair[0].to == pair[1].from)
    }
}

impl<F: fmt::Display> fmt::Display for ConversionPath<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.edges[0].from)?;
        for edge in &self.edges {
            write!(f, " -> {}", edge.to)?;
        }
        Ok(())
    }
}

impl<'a, F> IntoIterator for &'a ConversionPath<F> {
    type Item = &'a ConversionEdge<F>;
    type IntoIter = std::slice::Iter<'a, ConversionEdge<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> ConversionPath<&'static str> {
        ConversionPath::from_edges(vec![
            ConversionEdge::new("png", "webp"),
            ConversionEdge::new("webp", "jpg"),
        ])
    }

    #[test]
    fn test_path_endpoints() {
        let path = chain();
        assert_eq!(path.len(), 2);
        assert!(!path.is_empty());
        assert_eq!(*path.source(), "png");
        assert_eq!(*path.target(), "jpg");
    }

    #[test]
    fn test_path_formats() {
        let formats: Vec<_> = chain().formats().copied().collect();
        assert_eq!(formats, vec!["png", "webp", "jpg"]);
    }

    #[test]
    fn test_path_display() {
        assert_eq!(chain().to_string(), "png -> webp -> jpg");
    }

    #[test]
    fn test_path_validation() {
        let path = chain();
        assert!(path.is_valid_for(&["png"], &"jpg"));
        assert!(!path.is_valid_for(&["gif"], &"jpg"));
        assert!(!path.is_valid_for(&["png"], &"webp"));

        let broken = ConversionPath::from_edges(vec![
            ConversionEdge::new("png", "webp"),
            ConversionEdge::new("gif", "jpg"),
        ]);
        assert!(!broken.is_valid_for(&["png"], &"jpg"));
    }

    #[test]
    fn test_path_serializes_as_edge_array() {
        let json = serde_json::to_string(&chain()).unwrap();
        assert_eq!(
            json,
            r#"[{"from":"png","to":"webp"},{"from":"webp","to":"jpg"}]"#
        );
    }
}
