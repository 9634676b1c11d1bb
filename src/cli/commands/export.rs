//! export command - Print the canonical form of a graph document

use std::path::Path;

use anyhow::{Context as _, Result};

use super::open_graph;
use crate::cli::Context;
use crate::core::document::GraphDocument;
use crate::core::graph::Graph;
use crate::ui::output;

/// Print the canonical JSON document for the graph in `file`.
pub fn export(ctx: &Context, file: &Path) -> Result<()> {
    let graph = open_graph(file)?;
    output::result(&export_json(&graph)?);
    output::debug(
        format!(
            "exported {} node(s), {} edge(s)",
            graph.node_count(),
            graph.edge_count()
        ),
        ctx.verbosity(),
    );
    Ok(())
}

/// Canonical pretty-printed JSON for `graph`.
pub fn export_json(graph: &Graph) -> Result<String> {
    GraphDocument::from_graph(graph)
        .to_json_pretty()
        .context("Failed to serialize graph")
}
