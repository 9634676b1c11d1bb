//! neighbors command - List the neighbors of a node

use std::path::Path;

use anyhow::{Context as _, Result};

use super::open_graph;
use crate::cli::Context;
use crate::core::graph::Graph;
use crate::core::types::{NodeId, NodeType};
use crate::ui::output;

/// Print the neighbors of `id`, one per line, in traversal order.
///
/// With `node_type`, only neighbors of that type are listed. An empty
/// listing is reported as a note on stderr, leaving stdout empty.
pub fn neighbors(ctx: &Context, file: &Path, id: &str, node_type: Option<NodeType>) -> Result<()> {
    let graph = open_graph(file)?;
    let id = NodeId::new(id).context("Invalid node id")?;
    let listing = neighbor_listing(&graph, &id, node_type)?;

    if listing.is_empty() {
        let message = match node_type {
            Some(kind) => format!("'{}' has no {} neighbors", id, kind),
            None => format!("'{}' has no neighbors", id),
        };
        output::note(message, ctx.verbosity());
        return Ok(());
    }
    output::result(&output::format_list(&listing, ""));
    Ok(())
}

/// `"<id>\t<TYPE>"` for each neighbor of `id`, ascending by id.
pub fn neighbor_listing(
    graph: &Graph,
    id: &NodeId,
    node_type: Option<NodeType>,
) -> Result<Vec<String>> {
    graph.require_node(id)?;
    Ok(graph
        .neighbors(id)
        .filter(|n| node_type.map_or(true, |kind| n.node_type == kind))
        .map(|n| format!("{}\t{}", n.id, n.node_type))
        .collect())
}
