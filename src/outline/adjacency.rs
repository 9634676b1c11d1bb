//! outline::adjacency
//!
//! Neighbor and cross-reference views over a [`Graph`].
//!
//! A lexeme never nests another lexeme in the outline (except under the
//! root). Lexeme-to-lexeme links are instead shown as cross-references,
//! which this module collects from two sources:
//!
//! 1. Direct edges from the node to other lexemes
//! 2. An [`IncomingLinks`] collaborator, which may know about links the
//!    graph snapshot does not carry
//!
//! The root never appears as a cross-reference target.

use std::collections::BTreeSet;

use crate::core::graph::Graph;
use crate::core::types::{Node, NodeId};

/// Source of "other lexemes linked to this node" outside the traversal.
///
/// Implementations should leave out `root`; the view filters it again
/// regardless.
pub trait IncomingLinks {
    /// Ids of lexemes linked to `node`, excluding `root`.
    fn incoming_lexemes(&self, node: &NodeId, root: &NodeId) -> Vec<NodeId>;
}

/// A collaborator that knows no extra links.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIncomingLinks;

impl IncomingLinks for NoIncomingLinks {
    fn incoming_lexemes(&self, _node: &NodeId, _root: &NodeId) -> Vec<NodeId> {
        Vec::new()
    }
}

impl<F> IncomingLinks for F
where
    F: Fn(&NodeId, &NodeId) -> Vec<NodeId>,
{
    fn incoming_lexemes(&self, node: &NodeId, root: &NodeId) -> Vec<NodeId> {
        self(node, root)
    }
}

/// The graph answers from its own edge set: every lexeme adjacent to
/// `node`, except `root`.
impl IncomingLinks for Graph {
    fn incoming_lexemes(&self, node: &NodeId, root: &NodeId) -> Vec<NodeId> {
        self.neighbors(node)
            .filter(|n| n.is_lexeme() && &n.id != root)
            .map(|n| n.id.clone())
            .collect()
    }
}

/// Read-only adjacency view used by the renderer.
pub struct AdjacencyView<'g, L: ?Sized> {
    graph: &'g Graph,
    links: &'g L,
}

impl<'g, L: IncomingLinks + ?Sized> AdjacencyView<'g, L> {
    pub fn new(graph: &'g Graph, links: &'g L) -> Self {
        Self { graph, links }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Neighbors of `id` in ascending id order.
    pub fn neighbors(&self, id: &NodeId) -> impl Iterator<Item = &'g Node> + 'g {
        self.graph.neighbors(id)
    }

    /// Lexemes linked to `node`, excluding `root`.
    ///
    /// Direct lexeme neighbors come first in ascending id order, followed by
    /// the collaborator's ids in ascending order. An id already on the list
    /// is not repeated.
    pub fn linked_lexemes(&self, node: &Node, root: &NodeId) -> Vec<NodeId> {
        let incoming: BTreeSet<NodeId> = self
            .links
            .incoming_lexemes(&node.id, root)
            .into_iter()
            .collect();

        // Ids that may not be listed (again).
        let mut taken: BTreeSet<&NodeId> = BTreeSet::from([root, &node.id]);
        let mut linked = Vec::new();

        let direct = self
            .graph
            .neighbors(&node.id)
            .filter(|t| t.is_lexeme())
            .map(|t| &t.id);
        for id in direct {
            if taken.insert(id) {
                linked.push(id.clone());
            }
        }
        for id in &incoming {
            if taken.insert(id) {
                linked.push(id.clone());
            }
        }
        linked
    }
}
