//! core::graph
//!
//! Undirected graph of typed nodes.
//!
//! # Architecture
//!
//! The graph is an arena:
//! - Nodes are stored once, keyed by id
//! - Edges are stored once, in canonical form (see [`Edge`])
//! - An adjacency index (id -> neighbor ids) is derived from the edge set
//!   and kept in step with it; nodes never hold references to each other
//!
//! # Invariants
//!
//! - Node ids are unique
//! - Every edge joins two distinct nodes present in the graph
//! - `(a, b)` and `(b, a)` are the same edge
//! - Neighbor iteration is in ascending id order

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;
use tracing::debug;

use super::types::{Edge, Node, NodeId};

/// Errors from graph construction and lookup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// The snapshot violates a graph invariant and was rejected as a whole.
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    /// The requested node does not exist.
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),
}

/// An undirected graph of typed nodes.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: BTreeMap<NodeId, Node>,
    edges: BTreeSet<Edge>,
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,
}

/// Graphs are equal when they hold the same node records (id, coordinates
/// and type) and the same edges. `Node` equality alone only compares ids.
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.edges == other.edges
            && self.nodes.len() == other.nodes.len()
            && self
                .nodes
                .values()
                .zip(other.nodes.values())
                .all(|(a, b)| {
                    a.id == b.id && a.x == b.x && a.y == b.y && a.node_type == b.node_type
                })
    }
}

impl Eq for Graph {}

/// Build a graph from node and edge collections.
///
/// Nodes are inserted first, then edges. Duplicate edges (in either
/// orientation) collapse into one.
///
/// # Errors
///
/// Returns `GraphError::InvalidGraph` if two nodes share an id or an edge
/// references a node that is not in `nodes`.
///
/// # Example
///
/// ```
/// use itgraph::core::graph::build_graph;
/// use itgraph::core::types::{Edge, Node, NodeId, NodeType};
///
/// let a = NodeId::new("a").unwrap();
/// let b = NodeId::new("b").unwrap();
/// let graph = build_graph(
///     vec![
///         Node::new(a.clone(), 0, 0, NodeType::Lexeme),
///         Node::new(b.clone(), 0, 0, NodeType::Lexeme),
///     ],
///     vec![Edge::new(a.clone(), b.clone()).unwrap(), Edge::new(b, a).unwrap()],
/// )
/// .unwrap();
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// ```
pub fn build_graph(
    nodes: impl IntoIterator<Item = Node>,
    edges: impl IntoIterator<Item = Edge>,
) -> Result<Graph, GraphError> {
    let mut graph = Graph::new();
    for node in nodes {
        graph.add_node(node)?;
    }
    for edge in edges {
        graph.add_edge(edge)?;
    }
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built graph"
    );
    Ok(graph)
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::InvalidGraph` if a node with the same id exists.
    pub fn add_node(&mut self, node: Node) -> Result<(), GraphError> {
        if self.nodes.contains_key(&node.id) {
            return Err(GraphError::InvalidGraph(format!(
                "duplicated node '{}'",
                node.id
            )));
        }
        self.adjacency.entry(node.id.clone()).or_default();
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// Replace the coordinates and type of an existing node.
    ///
    /// Returns `false` if no node has that id.
    pub fn update_node(&mut self, node: Node) -> bool {
        match self.nodes.get_mut(&node.id) {
            Some(found) => {
                found.x = node.x;
                found.y = node.y;
                found.node_type = node.node_type;
                true
            }
            None => false,
        }
    }

    /// Remove a node together with every edge that touches it.
    ///
    /// Returns `false` if no node has that id.
    pub fn remove_node(&mut self, id: &NodeId) -> bool {
        if self.nodes.remove(id).is_none() {
            return false;
        }
        let incident: Vec<Edge> = self
            .edges
            .iter()
            .filter(|edge| edge.touches(id))
            .cloned()
            .collect();
        for edge in &incident {
            if let Some(other) = edge.other(id) {
                self.unlink(other, id);
            }
            self.edges.remove(edge);
        }
        self.adjacency.remove(id);
        true
    }

    /// Add an edge.
    ///
    /// Returns `true` if the edge is new, `false` if it was already present
    /// (in either orientation).
    ///
    /// # Errors
    ///
    /// Returns `GraphError::InvalidGraph` if either endpoint is missing.
    pub fn add_edge(&mut self, edge: Edge) -> Result<bool, GraphError> {
        for end in [edge.source(), edge.target()] {
            if !self.nodes.contains_key(end) {
                return Err(GraphError::InvalidGraph(format!(
                    "edge '{edge}' references unknown node '{end}'"
                )));
            }
        }
        if self.edges.contains(&edge) {
            return Ok(false);
        }
        self.link(edge.source(), edge.target());
        self.link(edge.target(), edge.source());
        self.edges.insert(edge);
        Ok(true)
    }

    /// Remove an edge. Returns `false` if it was not present.
    pub fn remove_edge(&mut self, edge: &Edge) -> bool {
        if !self.edges.remove(edge) {
            return false;
        }
        self.unlink(edge.source(), edge.target());
        self.unlink(edge.target(), edge.source());
        true
    }

    /// Remove every node and edge.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.adjacency.clear();
    }

    fn link(&mut self, from: &NodeId, to: &NodeId) {
        self.adjacency
            .entry(from.clone())
            .or_default()
            .insert(to.clone());
    }

    fn unlink(&mut self, from: &NodeId, to: &NodeId) {
        if let Some(set) = self.adjacency.get_mut(from) {
            set.remove(to);
        }
    }

    /// Look up a node by id.
    pub fn find_node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Look up a node by id, failing with `NodeNotFound`.
    pub fn require_node(&self, id: &NodeId) -> Result<&Node, GraphError> {
        self.find_node(id)
            .ok_or_else(|| GraphError::NodeNotFound(id.clone()))
    }

    /// Whether a node with this id exists.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Neighbors of `id` in ascending id order.
    ///
    /// Unknown ids have no neighbors.
    pub fn neighbors<'a>(&'a self, id: &NodeId) -> impl Iterator<Item = &'a Node> + 'a {
        self.adjacency
            .get(id)
            .into_iter()
            .flatten()
            .filter_map(|neighbor| self.nodes.get(neighbor))
    }

    /// Number of neighbors of `id`.
    pub fn degree(&self, id: &NodeId) -> usize {
        self.adjacency.get(id).map_or(0, BTreeSet::len)
    }

    /// All nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All edges in canonical order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has neither nodes nor edges.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::NodeType;

    fn id(s: &str) -> NodeId {
        NodeId::new(s).unwrap()
    }

    fn node(s: &str, node_type: NodeType) -> Node {
        Node::new(id(s), 0, 0, node_type)
    }

    fn edge(a: &str, b: &str) -> Edge {
        Edge::new(id(a), id(b)).unwrap()
    }

    fn triangle() -> Graph {
        build_graph(
            vec![
                node("a", NodeType::Lexeme),
                node("b", NodeType::Division),
                node("c", NodeType::Lexeme),
            ],
            vec![edge("a", "b"), edge("b", "c"), edge("c", "a")],
        )
        .unwrap()
    }

    fn neighbor_ids(graph: &Graph, of: &str) -> Vec<String> {
        graph
            .neighbors(&id(of))
            .map(|n| n.id.as_str().to_string())
            .collect()
    }

    #[test]
    fn empty_graph() {
        let graph = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert!(graph.find_node(&id("a")).is_none());
    }

    #[test]
    fn duplicate_node_rejected() {
        let result = build_graph(
            vec![node("a", NodeType::Lexeme), node("a", NodeType::Division)],
            vec![],
        );
        assert!(matches!(result, Err(GraphError::InvalidGraph(_))));
    }

    #[test]
    fn edge_to_missing_node_rejected() {
        let result = build_graph(vec![node("a", NodeType::Lexeme)], vec![edge("a", "zulu")]);
        match result {
            Err(GraphError::InvalidGraph(message)) => assert!(message.contains("zulu")),
            other => panic!("expected InvalidGraph, got {other:?}"),
        }
    }

    #[test]
    fn reversed_duplicate_edges_collapse() {
        let graph = build_graph(
            vec![node("a", NodeType::Lexeme), node("b", NodeType::Lexeme)],
            vec![edge("a", "b"), edge("b", "a"), edge("a", "b")],
        )
        .unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree(&id("a")), 1);
    }

    #[test]
    fn add_edge_reports_novelty() {
        let mut graph = triangle();
        assert!(!graph.add_edge(edge("b", "a")).unwrap());
        graph.add_node(node("d", NodeType::Lexeme)).unwrap();
        assert!(graph.add_edge(edge("d", "a")).unwrap());
    }

    #[test]
    fn neighbors_are_sorted_and_undirected() {
        let graph = triangle();
        assert_eq!(neighbor_ids(&graph, "a"), vec!["b", "c"]);
        assert_eq!(neighbor_ids(&graph, "c"), vec!["a", "b"]);
        assert_eq!(neighbor_ids(&graph, "b"), vec!["a", "c"]);
    }

    #[test]
    fn neighbors_of_unknown_node_are_empty() {
        let graph = triangle();
        assert_eq!(graph.neighbors(&id("zulu")).count(), 0);
    }

    #[test]
    fn isolated_node_has_no_neighbors() {
        let graph = build_graph(vec![node("solo", NodeType::Lexeme)], vec![]).unwrap();
        assert_eq!(graph.degree(&id("solo")), 0);
        assert!(graph.contains(&id("solo")));
    }

    #[test]
    fn require_node_reports_missing_id() {
        let graph = triangle();
        assert!(graph.require_node(&id("a")).is_ok());
        assert_eq!(
            graph.require_node(&id("zulu")),
            Err(GraphError::NodeNotFound(id("zulu")))
        );
    }

    #[test]
    fn update_node_changes_attributes() {
        let mut graph = triangle();
        assert!(graph.update_node(Node::new(id("b"), 5, 7, NodeType::Opposition)));
        let b = graph.find_node(&id("b")).unwrap();
        assert_eq!((b.x, b.y, b.node_type), (5, 7, NodeType::Opposition));
        assert!(!graph.update_node(node("zulu", NodeType::Lexeme)));
    }

    #[test]
    fn remove_node_drops_incident_edges() {
        let mut graph = triangle();
        assert!(graph.remove_node(&id("b")));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(neighbor_ids(&graph, "a"), vec!["c"]);
        assert_eq!(neighbor_ids(&graph, "c"), vec!["a"]);
        assert!(!graph.remove_node(&id("b")));
    }

    #[test]
    fn remove_edge_updates_adjacency() {
        let mut graph = triangle();
        assert!(graph.remove_edge(&edge("c", "a")));
        assert_eq!(neighbor_ids(&graph, "a"), vec!["b"]);
        assert!(!graph.remove_edge(&edge("a", "c")));
    }

    #[test]
    fn clear_empties_graph() {
        let mut graph = triangle();
        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.neighbors(&id("a")).count(), 0);
    }

    #[test]
    fn edges_iterate_in_canonical_order() {
        let graph = triangle();
        let edges: Vec<String> = graph.edges().map(ToString::to_string).collect();
        assert_eq!(edges, vec!["a -- b", "a -- c", "b -- c"]);
    }

    mod equality {
        use super::*;

        fn single(x: u32, y: u32, node_type: NodeType) -> Graph {
            build_graph(vec![Node::new(id("a"), x, y, node_type)], vec![]).unwrap()
        }

        #[test]
        fn same_records_are_equal() {
            assert_eq!(triangle(), triangle());
            assert_eq!(
                single(1, 2, NodeType::Lexeme),
                single(1, 2, NodeType::Lexeme)
            );
        }

        #[test]
        fn node_type_matters() {
            assert_ne!(
                single(1, 2, NodeType::Lexeme),
                single(1, 2, NodeType::Division)
            );
        }

        #[test]
        fn coordinates_matter() {
            assert_ne!(
                single(1, 2, NodeType::Lexeme),
                single(9, 9, NodeType::Lexeme)
            );
        }

        #[test]
        fn edges_matter() {
            let mut fewer = triangle();
            fewer.remove_edge(&edge("a", "b"));
            assert_ne!(triangle(), fewer);
        }
    }
}
