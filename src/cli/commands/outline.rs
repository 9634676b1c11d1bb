//! outline command - Print the numbered outline of a graph

use std::path::Path;

use anyhow::{anyhow, bail, Context as _, Result};

use super::open_graph;
use crate::cli::Context;
use crate::core::config::Config;
use crate::core::types::NodeId;
use crate::outline::render_with;
use crate::ui::output;

/// Print the outline of the graph in `file`.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `file` - Graph document
/// * `root` - Root id; falls back to the configured root
/// * `margin` - Leader margin override
pub fn outline(ctx: &Context, file: &Path, root: Option<&str>, margin: Option<usize>) -> Result<()> {
    let config = ctx.load_config()?;
    let text = render_outline(&config, file, root, margin)?;
    output::result(&text);
    Ok(())
}

/// Render the outline text without printing it.
pub fn render_outline(
    config: &Config,
    file: &Path,
    root: Option<&str>,
    margin: Option<usize>,
) -> Result<String> {
    let root = root.or(config.root()).ok_or_else(|| {
        anyhow!("No root node given. Pass --root or set 'root' in the config file.")
    })?;
    let root = NodeId::new(root).context("Invalid root node id")?;

    let mut style = config.leader_style();
    if let Some(margin) = margin {
        if margin == 0 {
            bail!("--margin must be at least 1");
        }
        style.margin = margin;
    }

    let graph = open_graph(file)?;

    // The graph doubles as the incoming-link lookup: any lexeme adjacent to
    // a node is linked to it.
    render_with(&graph, &root, &graph, style)
        .with_context(|| format!("Failed to render outline from '{}'", root))
}
