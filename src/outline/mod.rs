//! outline
//!
//! Numbered text outlines of a graph.
//!
//! # Pipeline
//!
//! 1. [`render::OutlineRenderer`] walks the graph depth-first from a root and
//!    produces typed [`OutlineLine`]s
//! 2. [`leader::LeaderFormatter`] aligns the cross-reference leaders and
//!    joins the lines
//!
//! # Example
//!
//! ```
//! use itgraph::core::graph::build_graph;
//! use itgraph::core::types::{Edge, Node, NodeId, NodeType};
//! use itgraph::outline::{render, NoIncomingLinks};
//!
//! let id = |s: &str| NodeId::new(s).unwrap();
//! let graph = build_graph(
//!     vec![
//!         Node::new(id("ens"), 0, 0, NodeType::Lexeme),
//!         Node::new(id("bravo"), 0, 0, NodeType::Lexeme),
//!         Node::new(id("charlie"), 0, 0, NodeType::Lexeme),
//!     ],
//!     vec![
//!         Edge::new(id("ens"), id("bravo")).unwrap(),
//!         Edge::new(id("ens"), id("charlie")).unwrap(),
//!         Edge::new(id("bravo"), id("charlie")).unwrap(),
//!     ],
//! )
//! .unwrap();
//!
//! let text = render(&graph, &id("ens"), &NoIncomingLinks).unwrap();
//! assert_eq!(
//!     text,
//!     "1 ens\n1.1 bravo ..... charlie\n1.2 charlie ... bravo\n"
//! );
//! ```

pub mod adjacency;
pub mod leader;
pub mod render;

pub use adjacency::{AdjacencyView, IncomingLinks, NoIncomingLinks};
pub use leader::{LeaderFormatter, LeaderStyle};
pub use render::{OutlineLine, OutlineNumber, OutlineRenderer};

use crate::core::graph::{Graph, GraphError};
use crate::core::types::NodeId;

/// Render the outline of `graph` from `root` with the default leader style.
///
/// # Errors
///
/// Returns `GraphError::NodeNotFound` if `root` is not in the graph.
pub fn render<L: IncomingLinks + ?Sized>(
    graph: &Graph,
    root: &NodeId,
    links: &L,
) -> Result<String, GraphError> {
    render_with(graph, root, links, LeaderStyle::default())
}

/// Render the outline of `graph` from `root` with an explicit leader style.
pub fn render_with<L: IncomingLinks + ?Sized>(
    graph: &Graph,
    root: &NodeId,
    links: &L,
    style: LeaderStyle,
) -> Result<String, GraphError> {
    let lines = OutlineRenderer::new(graph, links).lines(root)?;
    Ok(LeaderFormatter::new(style).format(&lines))
}
