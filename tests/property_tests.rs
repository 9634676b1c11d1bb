//! Property-based tests for the graph model and outline rendering.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated graphs.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use itgraph::core::document::GraphDocument;
use itgraph::core::graph::{build_graph, Graph};
use itgraph::core::types::{Edge, Node, NodeId, NodeType};
use itgraph::outline::{render, NoIncomingLinks, OutlineLine, OutlineRenderer};

/// Strategy for generating node types.
fn node_type() -> impl Strategy<Value = NodeType> {
    prop_oneof![
        Just(NodeType::Lexeme),
        Just(NodeType::Division),
        Just(NodeType::Opposition),
    ]
}

/// Strategy for generating valid node ids.
fn valid_id() -> impl Strategy<Value = String> {
    "[a-z][a-z ]{0,8}"
}

fn name(index: usize) -> NodeId {
    NodeId::new(format!("n{index:02}")).unwrap()
}

/// Strategy for generating graphs of up to 10 nodes with arbitrary
/// coordinates and edges.
fn arbitrary_graph() -> impl Strategy<Value = Graph> {
    (1usize..10)
        .prop_flat_map(|n| {
            (
                prop::collection::vec((node_type(), 0u32..1000, 0u32..1000), n),
                prop::collection::vec((0..n, 0..n), 0..(n * 2)),
            )
        })
        .prop_map(|(records, pairs)| {
            let nodes = records
                .iter()
                .enumerate()
                .map(|(i, (kind, x, y))| Node::new(name(i), *x, *y, *kind));
            let edges = pairs
                .into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| Edge::new(name(a), name(b)).unwrap());
            build_graph(nodes, edges).unwrap()
        })
}

/// Node records as comparable tuples; `Node` equality only compares ids.
fn records(graph: &Graph) -> Vec<(NodeId, u32, u32, NodeType)> {
    graph
        .nodes()
        .map(|n| (n.id.clone(), n.x, n.y, n.node_type))
        .collect()
}

/// Strategy for a graph together with one of its node ids.
fn graph_and_root() -> impl Strategy<Value = (Graph, NodeId)> {
    arbitrary_graph().prop_flat_map(|graph| {
        let ids: Vec<NodeId> = graph.nodes().map(|n| n.id.clone()).collect();
        (Just(graph), prop::sample::select(ids))
    })
}

proptest! {
    /// Edges are equal regardless of endpoint order.
    #[test]
    fn edge_is_symmetric(a in valid_id(), b in valid_id()) {
        prop_assume!(a != b);
        let ab = Edge::new(NodeId::new(&a).unwrap(), NodeId::new(&b).unwrap()).unwrap();
        let ba = Edge::new(NodeId::new(&b).unwrap(), NodeId::new(&a).unwrap()).unwrap();
        prop_assert_eq!(&ab, &ba);
        prop_assert!(ab.source() < ab.target());
        prop_assert_eq!(ab.cmp(&ba), std::cmp::Ordering::Equal);
    }

    /// Edge ordering is a total order consistent with equality.
    #[test]
    fn edge_order_is_total(
        ends in prop::collection::vec((valid_id(), valid_id()), 3)
    ) {
        let edges: Vec<Edge> = ends
            .into_iter()
            .filter(|(a, b)| a != b)
            .map(|(a, b)| Edge::new(NodeId::new(a).unwrap(), NodeId::new(b).unwrap()).unwrap())
            .collect();
        for x in &edges {
            for y in &edges {
                prop_assert_eq!(x.cmp(y), y.cmp(x).reverse());
                prop_assert_eq!(x.cmp(y) == std::cmp::Ordering::Equal, x == y);
                for z in &edges {
                    if x <= y && y <= z {
                        prop_assert!(x <= z);
                    }
                }
            }
        }
    }

    /// Blank ids never validate.
    #[test]
    fn blank_id_rejected(id in "[ \t\n]{0,6}") {
        prop_assert!(NodeId::new(id).is_err());
    }

    /// Neighbor iteration is sorted and agrees with the edge set.
    #[test]
    fn neighbors_match_edges(graph in arbitrary_graph()) {
        for node in graph.nodes() {
            let ids: Vec<&NodeId> = graph.neighbors(&node.id).map(|n| &n.id).collect();
            let mut sorted = ids.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(&ids, &sorted);

            let incident = graph.edges().filter(|e| e.touches(&node.id)).count();
            prop_assert_eq!(ids.len(), incident);
            prop_assert_eq!(graph.degree(&node.id), incident);
        }
    }

    /// Exporting and re-importing preserves every node record and edge.
    #[test]
    fn document_preserves_graph(graph in arbitrary_graph()) {
        let json = GraphDocument::from_graph(&graph).to_json_pretty().unwrap();
        let restored = GraphDocument::from_json(&json).unwrap().into_graph().unwrap();
        prop_assert_eq!(records(&restored), records(&graph));
        prop_assert!(restored.edges().eq(graph.edges()));
        prop_assert_eq!(restored, graph);
    }

    /// Rendering the same graph twice gives the same text.
    #[test]
    fn render_is_deterministic((graph, root) in graph_and_root()) {
        let first = render(&graph, &root, &graph).unwrap();
        let second = render(&graph, &root, &graph).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Each node is listed at most once, and only lexemes are listed.
    #[test]
    fn entries_are_unique_lexemes((graph, root) in graph_and_root()) {
        let lines = OutlineRenderer::new(&graph, &NoIncomingLinks).lines(&root).unwrap();
        let mut seen = HashSet::new();
        for line in &lines {
            if let OutlineLine::Entry { id, .. } = line {
                prop_assert!(seen.insert(id.clone()), "{} listed twice", id);
                prop_assert!(graph.find_node(id).unwrap().is_lexeme());
            }
        }
    }

    /// Outline numbers appear in strictly increasing order.
    #[test]
    fn numbers_follow_preorder((graph, root) in graph_and_root()) {
        let lines = OutlineRenderer::new(&graph, &NoIncomingLinks).lines(&root).unwrap();
        let numbers: Vec<Vec<usize>> = lines
            .iter()
            .filter_map(|line| match line {
                OutlineLine::Entry { number, .. } | OutlineLine::Placeholder { number } => {
                    Some(number.parts().to_vec())
                }
                OutlineLine::Continuation { .. } => None,
            })
            .collect();

        for pair in numbers.windows(2) {
            prop_assert!(pair[0] < pair[1], "{:?} !< {:?}", pair[0], pair[1]);
        }
        for number in &numbers {
            prop_assert_eq!(number[0], 1);
        }
    }

    /// Every node number past the root extends the number of a node shown
    /// earlier (its entry, or the placeholder it opened) by one sibling
    /// index. Sibling indices start at 1 and grow within each parent.
    #[test]
    fn numbers_extend_their_parent((graph, root) in graph_and_root()) {
        let lines = OutlineRenderer::new(&graph, &NoIncomingLinks).lines(&root).unwrap();

        let mut shown: HashSet<Vec<usize>> = HashSet::new();
        let mut last_sibling: HashMap<Vec<usize>, usize> = HashMap::new();
        for line in &lines {
            // The number of the node this line belongs to
            let node_number = match line {
                OutlineLine::Entry { number, .. } => number.parts().to_vec(),
                OutlineLine::Placeholder { number } => {
                    let (zero, prefix) = number.parts().split_last().unwrap();
                    prop_assert_eq!(*zero, 0);
                    prefix.to_vec()
                }
                OutlineLine::Continuation { .. } => continue,
            };

            if let Some((index, parent)) = node_number.split_last() {
                if !parent.is_empty() {
                    prop_assert!(*index >= 1, "{:?} has sibling index 0", node_number);
                    prop_assert!(
                        shown.contains(parent),
                        "{:?} appears before its parent {:?}",
                        node_number,
                        parent
                    );
                    if let Some(previous) = last_sibling.get(parent) {
                        prop_assert!(index > previous, "{:?} after sibling {}", node_number, previous);
                    }
                    last_sibling.insert(parent.to_vec(), *index);
                }
            }
            shown.insert(node_number);
        }
    }

    /// Index 0 marks exactly the placeholder lines.
    #[test]
    fn zero_index_marks_placeholders((graph, root) in graph_and_root()) {
        let lines = OutlineRenderer::new(&graph, &NoIncomingLinks).lines(&root).unwrap();
        for line in &lines {
            match line {
                OutlineLine::Entry { number, .. } => {
                    prop_assert!(number.depth() == 1 || number.parts().last() != Some(&0));
                }
                OutlineLine::Placeholder { number } => {
                    prop_assert_eq!(number.parts().last(), Some(&0));
                }
                OutlineLine::Continuation { .. } => {}
            }
        }
    }

    /// Continuations only ever follow an entry or another continuation.
    #[test]
    fn continuations_follow_entries((graph, root) in graph_and_root()) {
        let lines = OutlineRenderer::new(&graph, &graph).lines(&root).unwrap();
        for (i, line) in lines.iter().enumerate() {
            if let OutlineLine::Continuation { target } = line {
                prop_assert!(i > 0);
                prop_assert!(!matches!(lines[i - 1], OutlineLine::Placeholder { .. }), "continuation at {} follows a placeholder", i);
                prop_assert_ne!(target, &root);
            }
        }
    }

    /// Rendered text has one newline-terminated row per outline line.
    #[test]
    fn text_has_one_row_per_line((graph, root) in graph_and_root()) {
        let lines = OutlineRenderer::new(&graph, &graph).lines(&root).unwrap();
        let text = render(&graph, &root, &graph).unwrap();
        prop_assert_eq!(text.lines().count(), lines.len());
        prop_assert!(text.is_empty() || text.ends_with('\n'));
    }
}
