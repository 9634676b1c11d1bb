//! outline::render
//!
//! Depth-first outline traversal.
//!
//! # Rules
//!
//! Starting at the root with outline number `1`:
//!
//! - A node already visited contributes nothing
//! - A lexeme emits an entry `"<number> <id>"`; unless it is the root, its
//!   linked lexemes are attached as leaders (first on the entry itself, the
//!   rest on continuation lines)
//! - A node with at least one unvisited neighbor opens a nesting level; a
//!   non-lexeme announces it with a placeholder `"<number>.0 *"`
//! - Children are the unvisited neighbors in ascending id order, except that
//!   a lexeme other than the root does not descend into another lexeme
//! - The k-th child is numbered `<number>.k`
//!
//! Outline numbers are values: each child receives its own extended copy, so
//! siblings share their prefix and nothing needs restoring on the way back.

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, trace};

use super::adjacency::{AdjacencyView, IncomingLinks};
use crate::core::graph::{Graph, GraphError};
use crate::core::types::{Node, NodeId};

/// Dotted-decimal position in the outline, e.g. `1.3.2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OutlineNumber(Vec<usize>);

impl OutlineNumber {
    /// The root's number, `1`.
    pub fn root() -> Self {
        Self(vec![1])
    }

    /// This number extended with one more component.
    pub fn child(&self, index: usize) -> Self {
        let mut parts = Vec::with_capacity(self.0.len() + 1);
        parts.extend_from_slice(&self.0);
        parts.push(index);
        Self(parts)
    }

    /// Number of components.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn parts(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for OutlineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = self.0.iter();
        if let Some(first) = parts.next() {
            write!(f, "{first}")?;
        }
        for part in parts {
            write!(f, ".{part}")?;
        }
        Ok(())
    }
}

/// One line of an outline before leader alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineLine {
    /// A lexeme entry, optionally followed by a leader to `leader`.
    Entry {
        number: OutlineNumber,
        id: NodeId,
        leader: Option<NodeId>,
    },
    /// A nesting level opened by a non-lexeme node.
    Placeholder { number: OutlineNumber },
    /// A further leader belonging to the preceding entry.
    Continuation { target: NodeId },
}

impl OutlineLine {
    /// Text before the leader. Empty for continuation lines.
    pub fn label(&self) -> String {
        match self {
            OutlineLine::Entry { number, id, .. } => format!("{number} {id}"),
            OutlineLine::Placeholder { number } => format!("{number} *"),
            OutlineLine::Continuation { .. } => String::new(),
        }
    }

    /// Whether this line starts a new numbered item.
    pub fn is_numbered(&self) -> bool {
        !matches!(self, OutlineLine::Continuation { .. })
    }
}

/// Walks a graph and produces [`OutlineLine`]s.
pub struct OutlineRenderer<'g, L: ?Sized> {
    view: AdjacencyView<'g, L>,
}

/// Traversal state owned by one call to [`OutlineRenderer::lines`].
struct Walk<'g> {
    root: &'g NodeId,
    visited: HashSet<&'g NodeId>,
    lines: Vec<OutlineLine>,
}

impl<'g, L: IncomingLinks + ?Sized> OutlineRenderer<'g, L> {
    pub fn new(graph: &'g Graph, links: &'g L) -> Self {
        Self {
            view: AdjacencyView::new(graph, links),
        }
    }

    /// Traverse from `root` and return the raw outline lines.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::NodeNotFound` if `root` is not in the graph.
    pub fn lines(&self, root: &NodeId) -> Result<Vec<OutlineLine>, GraphError> {
        let root = self.view.graph().require_node(root)?;
        let mut walk = Walk {
            root: &root.id,
            visited: HashSet::new(),
            lines: Vec::new(),
        };
        self.visit(root, OutlineNumber::root(), &mut walk);
        debug!(
            root = %root.id,
            visited = walk.visited.len(),
            lines = walk.lines.len(),
            "outline traversal finished"
        );
        Ok(walk.lines)
    }

    fn visit(&self, node: &'g Node, number: OutlineNumber, walk: &mut Walk<'g>) {
        if !walk.visited.insert(&node.id) {
            return;
        }
        trace!(node = %node.id, %number, "visit");

        let is_root = &node.id == walk.root;
        if node.is_lexeme() {
            self.emit_entry(node, &number, is_root, walk);
        }

        let opens_level = self
            .view
            .neighbors(&node.id)
            .any(|t| !walk.visited.contains(&t.id));
        if !opens_level {
            return;
        }
        if !node.is_lexeme() {
            walk.lines.push(OutlineLine::Placeholder {
                number: number.child(0),
            });
        }

        let mut index = 0;
        for child in self.view.neighbors(&node.id) {
            if walk.visited.contains(&child.id) {
                continue;
            }
            if !(is_root || !node.is_lexeme() || !child.is_lexeme()) {
                continue;
            }
            index += 1;
            self.visit(child, number.child(index), walk);
        }
    }

    fn emit_entry(&self, node: &Node, number: &OutlineNumber, is_root: bool, walk: &mut Walk<'g>) {
        let linked = if is_root {
            Vec::new()
        } else {
            self.view.linked_lexemes(node, walk.root)
        };

        let mut linked = linked.into_iter();
        walk.lines.push(OutlineLine::Entry {
            number: number.clone(),
            id: node.id.clone(),
            leader: linked.next(),
        });
        walk.lines
            .extend(linked.map(|target| OutlineLine::Continuation { target }));
    }
}
