//! core::document
//!
//! JSON snapshot documents.
//!
//! # Format
//!
//! ```json
//! {
//!   "nodes": [
//!     { "id": "ens", "x": 0, "y": 0, "type": "LEXEME" },
//!     { "id": "delta", "x": 30, "y": 30, "type": "DIVISION" }
//!   ],
//!   "edges": [
//!     { "source": "ens", "target": "delta" }
//!   ]
//! }
//! ```
//!
//! Edges are undirected; `source` and `target` may be given in either
//! order. Importing a document inserts all nodes first, then all edges, and
//! rejects the whole document on the first violation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::graph::{build_graph, Graph, GraphError};
use super::types::{Edge, Node, NodeId};

/// Errors from reading or importing a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read graph document '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse graph document: {0}")]
    ParseError(String),

    #[error("failed to serialize graph document: {0}")]
    SerializeError(String),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// An edge as written in a document, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: NodeId,
    pub target: NodeId,
}

impl From<&Edge> for EdgeRecord {
    fn from(edge: &Edge) -> Self {
        Self {
            source: edge.source().clone(),
            target: edge.target().clone(),
        }
    }
}

/// A serialized graph snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDocument {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphDocument {
    /// Parse a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(json).map_err(|e| DocumentError::ParseError(e.to_string()))
    }

    /// Read and parse a document from a file.
    pub fn read(path: &Path) -> Result<Self, DocumentError> {
        let contents = fs::read_to_string(path).map_err(|e| DocumentError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(path = %path.display(), bytes = contents.len(), "read graph document");
        Self::from_json(&contents)
    }

    /// Validate the document and build a graph from it.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::InvalidGraph` (wrapped) for duplicate node ids,
    /// self loops, or edges that reference unknown nodes.
    pub fn into_graph(self) -> Result<Graph, DocumentError> {
        let edges = self
            .edges
            .into_iter()
            .map(|record| {
                Edge::new(record.source, record.target)
                    .map_err(|e| GraphError::InvalidGraph(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(build_graph(self.nodes, edges)?)
    }

    /// Canonical document for a graph: nodes by id, edges canonicalized and
    /// sorted.
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            nodes: graph.nodes().cloned().collect(),
            edges: graph.edges().map(EdgeRecord::from).collect(),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self).map_err(|e| DocumentError::SerializeError(e.to_string()))
    }
}

/// Read a document file and build its graph.
pub fn load_graph(path: &Path) -> Result<Graph, DocumentError> {
    GraphDocument::read(path)?.into_graph()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::NodeType;

    const SMALL: &str = r#"{
        "nodes": [
            {"id": "a", "x": 100, "y": 200, "type": "OPPOSITION"},
            {"id": "b", "x": 300, "y": 400, "type": "LEXEME"},
            {"id": "c", "x": 500, "y": 600, "type": "LEXEME"}
        ],
        "edges": [
            {"source": "a", "target": "b"},
            {"source": "c", "target": "a"}
        ]
    }"#;

    #[test]
    fn parses_and_builds() {
        let graph = GraphDocument::from_json(SMALL).unwrap().into_graph().unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        let a = graph.find_node(&NodeId::new("a").unwrap()).unwrap();
        assert_eq!(a.node_type, NodeType::Opposition);
        assert_eq!((a.x, a.y), (100, 200));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let graph = GraphDocument::from_json("{}").unwrap().into_graph().unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn unknown_fields_rejected() {
        let result = GraphDocument::from_json(r#"{"nodes": [], "vertices": []}"#);
        assert!(matches!(result, Err(DocumentError::ParseError(_))));
    }

    #[test]
    fn unknown_node_type_rejected() {
        let result = GraphDocument::from_json(r#"{"nodes": [{"id": "a", "type": "VERTEX"}]}"#);
        assert!(matches!(result, Err(DocumentError::ParseError(_))));
    }

    #[test]
    fn self_loop_is_invalid_graph() {
        let doc = GraphDocument::from_json(
            r#"{"nodes": [{"id": "a", "type": "LEXEME"}],
                "edges": [{"source": "a", "target": "a"}]}"#,
        )
        .unwrap();
        assert!(matches!(
            doc.into_graph(),
            Err(DocumentError::Graph(GraphError::InvalidGraph(_)))
        ));
    }

    #[test]
    fn dangling_edge_is_invalid_graph() {
        let doc = GraphDocument::from_json(
            r#"{"nodes": [{"id": "a", "type": "LEXEME"}],
                "edges": [{"source": "a", "target": "b"}]}"#,
        )
        .unwrap();
        assert!(matches!(
            doc.into_graph(),
            Err(DocumentError::Graph(GraphError::InvalidGraph(_)))
        ));
    }

    #[test]
    fn canonical_export_sorts_and_dedupes() {
        let doc = GraphDocument::from_json(
            r#"{"nodes": [{"id": "b", "type": "LEXEME"}, {"id": "a", "type": "LEXEME"}],
                "edges": [{"source": "b", "target": "a"}, {"source": "a", "target": "b"}]}"#,
        )
        .unwrap();
        let graph = doc.into_graph().unwrap();
        let exported = GraphDocument::from_graph(&graph);

        let ids: Vec<&str> = exported.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(exported.edges.len(), 1);
        assert_eq!(exported.edges[0].source.as_str(), "a");
        assert_eq!(exported.edges[0].target.as_str(), "b");
    }

    #[test]
    fn read_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_graph(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(DocumentError::ReadError { .. })));
    }

    #[test]
    fn read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.json");
        fs::write(&path, SMALL).unwrap();
        let graph = load_graph(&path).unwrap();
        assert_eq!(graph.node_count(), 3);
    }
}
