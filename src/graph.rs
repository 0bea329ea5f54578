//! Loading conversion graphs from JSON.
//!
//! Two shapes are accepted:
//!
//! ```json
//! [{ "from": "png", "to": "webp" }, { "from": "webp", "to": "jpg" }]
//! ```
//!
//! ```json
//! { "edges": [{ "from": "png", "to": "webp" }] }
//! ```

use crate::edge::ConversionEdge;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// A list of converters keyed by string format names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionGraph {
    edges: Vec<ConversionEdge<String>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GraphDocument {
    Edges(Vec<ConversionEdge<String>>),
    Wrapped(WrappedEdges),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct WrappedEdges {
    edges: Vec<ConversionEdge<String>>,
}

impl ConversionGraph {
    /// Creates a graph from edges, validating format names.
    ///
    /// # Errors
    ///
    /// Returns an error if any edge has an empty or blank format name.
    pub fn new(edges: Vec<ConversionEdge<String>>) -> Result<Self> {
        if let Some((position, edge)) = edges
            .iter()
            .enumerate()
            .find(|(_, edge)| edge.from.trim().is_empty() || edge.to.trim().is_empty())
        {
            return Err(Error::invalid_graph(format!(
                "edge #{position} ({edge}) has an empty format name"
            )));
        }

        Ok(Self { edges })
    }

    /// Parses a graph from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or an edge is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use convpath::ConversionGraph;
    ///
    /// let graph = ConversionGraph::from_json_str(r#"[{"from":"png","to":"jpg"}]"#)?;
    /// assert_eq!(graph.len(), 1);
    /// # Ok::<(), convpath::Error>(())
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: GraphDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Loads a graph from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON,
    /// or contains an invalid edge.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading conversion graph from {}", path.display());

        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let document: GraphDocument = serde_json::from_reader(BufReader::new(file))?;
        let graph = Self::from_document(document)?;

        debug!(
            "Loaded {} edges over {} formats",
            graph.len(),
            graph.formats().len()
        );
        Ok(graph)
    }

    fn from_document(document: GraphDocument) -> Result<Self> {
        match document {
            GraphDocument::Edges(edges) | GraphDocument::Wrapped(WrappedEdges { edges }) => {
                Self::new(edges)
            }
        }
    }

    /// Returns the edges in file order.
    #[must_use]
    pub fn edges(&self) -> &[ConversionEdge<String>] {
        &self.edges
    }

    /// Number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Distinct formats mentioned by any edge, in first-seen order.
    #[must_use]
    pub fn formats(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.edges
            .iter()
            .flat_map(|edge| [edge.from.as_str(), edge.to.as_str()])
            .filter(|format| seen.insert(*format))
            .collect()
    }
}

impl From<ConversionGraph> for Vec<ConversionEdge<String>> {
    fn from(graph: ConversionGraph) -> Self {
        graph.edges
    }
}
