//! check command - Validate a graph document

use std::path::Path;

use anyhow::Result;

use super::open_graph;
use crate::cli::Context;
use crate::core::graph::Graph;
use crate::core::types::NodeType;
use crate::ui::output;

/// Validate the graph document in `file` and print a summary.
pub fn check(ctx: &Context, file: &Path) -> Result<()> {
    let graph = open_graph(file)?;
    let verbosity = ctx.verbosity();

    for node in graph.nodes().filter(|n| graph.degree(&n.id) == 0) {
        output::debug(format!("node '{}' has no edges", node.id), verbosity);
    }

    output::success(summarize(&graph), verbosity);
    Ok(())
}

/// One-line summary of a graph.
pub fn summarize(graph: &Graph) -> String {
    let count = |kind: NodeType| graph.nodes().filter(|n| n.node_type == kind).count();
    format!(
        "ok: {} node(s) ({} lexeme, {} division, {} opposition), {} edge(s)",
        graph.node_count(),
        count(NodeType::Lexeme),
        count(NodeType::Division),
        count(NodeType::Opposition),
        graph.edge_count()
    )
}
