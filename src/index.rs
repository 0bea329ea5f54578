use crate::edge::{ConversionEdge, Format};
use std::collections::HashMap;

/// Lookup tables over a borrowed edge list.
///
/// Both maps hold edge positions in input order, so iterating a bucket
/// visits edges in the same order as scanning the input slice.
#[derive(Debug)]
pub(crate) struct EdgeIndex<'a, F> {
    edges: &'a [ConversionEdge<F>],
    by_to: HashMap<&'a F, Vec<usize>>,
    by_from: HashMap<&'a F, Vec<usize>>,
}

impl<'a, F: Format> EdgeIndex<'a, F> {
    pub(crate) fn new(edges: &'a [ConversionEdge<F>]) -> Self {
        let mut by_to: HashMap<&F, Vec<usize>> = HashMap::new();
        let mut by_from: HashMap<&F, Vec<usize>> = HashMap::new();

        for (position, edge) in edges.iter().enumerate() {
            by_to.entry(&edge.to).or_default().push(position);
            by_from.entry(&edge.from).or_default().push(position);
        }

        Self {
            edges,
            by_to,
            by_from,
        }
    }

    /// Returns the edge at `position`.
    #[inline]
    pub(crate) fn edge(&self, position: usize) -> &'a ConversionEdge<F> {
        &self.edges[position]
    }

    /// Positions of edges producing `format`, in input order.
    pub(crate) fn producing(&self, format: &F) -> &[usize] {
        self.by_to.get(format).map_or(&[][..], Vec::as_slice)
    }

    /// Positions of edges reading `format`, in input order.
    pub(crate) fn consuming(&self, format: &F) -> &[usize] {
        self.by_from.get(format).map_or(&[][..], Vec::as_slice)
    }

    /// Total number of indexed edges.
    pub(crate) fn len(&self) -> usize {
        self.edges.len()
    }
}
